//! Built-in field types.
//!
//! Each submodule registers its generators and argument parsers with
//! explicit calls; [`register_builtins`] runs them in a fixed order at
//! startup. New types can be added without touching any dispatcher:
//! register a generator (and optionally an argument parser) under a
//! fresh name before compiling a schema.

mod lorem;
mod net;
mod numeric;
pub mod person;
mod temporal;
mod text;
pub mod words;

pub use words::WordSource;

use rand::rngs::StdRng;
use rand::Rng;

use crate::registry::Registry;

/// Register every built-in type.
pub fn register_builtins(registry: &mut Registry) {
    numeric::register(registry);
    text::register(registry);
    net::register(registry);
    person::register(registry);
    temporal::register(registry);
    words::register(registry);
    lorem::register(registry);
}

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uniform run of ASCII letters (upper and lower case).
pub(crate) fn random_letters(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// Uniform pick from a bundled static list.
pub(crate) fn pick(rng: &mut StdRng, items: &'static [&'static str]) -> &'static str {
    items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_letters_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [0, 1, 8, 64] {
            let s = random_letters(&mut rng, len);
            assert_eq!(s.len(), len);
            assert!(s.bytes().all(|b| b.is_ascii_alphabetic()));
        }
    }
}
