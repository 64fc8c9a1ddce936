//! Lorem-text field types: `lorem` (sentence), `lorem-paragraph`,
//! `lorem-long` (multi-paragraph).
//!
//! The text provider is compiled in behind the `lorem` feature; the
//! three type names stay registered either way, and without the
//! feature they fail at generation time. Absence of the provider is a
//! configuration fact, detected lazily at first use.

use crate::error::Result;
use crate::registry::{Config, GenContext, Registry, Value};

#[cfg(not(feature = "lorem"))]
use crate::error::Error;

pub(crate) fn register(registry: &mut Registry) {
    registry.register_generator("lorem", lorem_sentence_field);
    registry.register_generator("lorem-paragraph", lorem_paragraph_field);
    registry.register_generator("lorem-long", lorem_long_field);
}

#[cfg(feature = "lorem")]
mod provider {
    use rand::rngs::StdRng;
    use rand::Rng;

    const WORDS: &[&str] = &[
        "lorem",
        "ipsum",
        "dolor",
        "sit",
        "amet",
        "consectetur",
        "adipiscing",
        "elit",
        "sed",
        "eiusmod",
        "tempor",
        "incididunt",
        "labore",
        "dolore",
        "magna",
        "aliqua",
        "enim",
        "minim",
        "veniam",
        "quis",
        "nostrud",
        "exercitation",
        "ullamco",
        "laboris",
        "nisi",
        "aliquip",
        "commodo",
        "consequat",
        "duis",
        "aute",
        "irure",
        "reprehenderit",
        "voluptate",
        "velit",
        "esse",
        "cillum",
        "fugiat",
        "nulla",
        "pariatur",
        "excepteur",
        "sint",
        "occaecat",
        "cupidatat",
        "proident",
        "sunt",
        "culpa",
        "officia",
        "deserunt",
        "mollit",
        "anim",
        "laborum",
    ];

    fn word(rng: &mut StdRng) -> &'static str {
        WORDS[rng.gen_range(0..WORDS.len())]
    }

    /// One capitalized sentence ending in a period.
    pub fn sentence(rng: &mut StdRng) -> String {
        let count = rng.gen_range(5..=12);
        let mut text = (0..count).map(|_| word(rng)).collect::<Vec<_>>().join(" ");
        if let Some(first) = text.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        text.push('.');
        text
    }

    /// Several sentences on one line.
    pub fn paragraph(rng: &mut StdRng) -> String {
        let count = rng.gen_range(3..=6);
        (0..count).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
    }

    /// Several paragraphs separated by blank lines.
    pub fn text(rng: &mut StdRng) -> String {
        let count = rng.gen_range(2..=4);
        (0..count)
            .map(|_| paragraph(rng))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(feature = "lorem")]
fn lorem_sentence_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Ok(Value::Str(provider::sentence(&mut ctx.rng)))
}

#[cfg(feature = "lorem")]
fn lorem_paragraph_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Ok(Value::Str(provider::paragraph(&mut ctx.rng)))
}

#[cfg(feature = "lorem")]
fn lorem_long_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Ok(Value::Str(provider::text(&mut ctx.rng)))
}

#[cfg(not(feature = "lorem"))]
fn lorem_sentence_field(_ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Err(Error::DependencyMissing("lorem"))
}

#[cfg(not(feature = "lorem"))]
fn lorem_paragraph_field(_ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Err(Error::DependencyMissing("lorem"))
}

#[cfg(not(feature = "lorem"))]
fn lorem_long_field(_ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Err(Error::DependencyMissing("lorem"))
}

#[cfg(all(test, feature = "lorem"))]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_is_one_line() {
        let mut ctx = GenContext::with_seed(42);
        let value = lorem_sentence_field(&mut ctx, &Config::Raw(None))
            .unwrap()
            .to_string();
        assert!(value.split_whitespace().count() > 2);
        assert!(!value.contains('\n'));
        assert!(value.ends_with('.'));
        assert!(value.chars().next().unwrap().is_ascii_uppercase());
    }

    #[test]
    fn test_paragraph_has_several_sentences() {
        let mut ctx = GenContext::with_seed(42);
        let value = lorem_paragraph_field(&mut ctx, &Config::Raw(None))
            .unwrap()
            .to_string();
        assert!(value.split_whitespace().count() > 6);
        assert!(!value.contains("\n\n"));
        assert!(value.matches('.').count() >= 3);
    }

    #[test]
    fn test_long_text_has_paragraph_breaks() {
        let mut ctx = GenContext::with_seed(42);
        let value = lorem_long_field(&mut ctx, &Config::Raw(None))
            .unwrap()
            .to_string();
        assert!(value.split_whitespace().count() > 10);
        assert!(value.contains("\n\n"));
    }
}
