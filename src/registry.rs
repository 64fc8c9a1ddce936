//! Field-type registry and the dispatch currency it trades in.
//!
//! A type is a name bound to a generator function and, optionally, an
//! argument-parser function. The two slots may be registered in either
//! order; a type is usable once its generator slot is filled.

use ahash::AHashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

use crate::error::{Error, Result};

/// One generated scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Structured per-field configuration, produced once at compile time
/// by the type's argument parser and reused for every row.
#[derive(Debug, Clone, PartialEq)]
pub enum Config {
    /// Verbatim argument for types without an argument parser.
    Raw(Option<String>),
    /// Exclusive upper bound for `int` (`10^digits - 1`).
    Bound(u64),
    /// Output length for `string`.
    Length(usize),
    /// Choice set for `randomset`.
    Choices(Vec<String>),
    /// Epoch-second bounds for `date`/`datetime`.
    TimeRange { before: i64, after: i64 },
    /// Inclusive word-count range for `words`.
    WordRange { min: usize, max: usize },
}

/// Per-run generation state handed to every generator call.
pub struct GenContext {
    pub rng: StdRng,
}

impl GenContext {
    /// Entropy-seeded context.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded context for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GenContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces one value from a compiled configuration.
pub type GeneratorFn = fn(&mut GenContext, &Config) -> Result<Value>;

/// Parses a raw argument string (absent when the field gave none)
/// into a [`Config`], once per field at compile time.
pub type ArgParserFn = fn(Option<&str>) -> Result<Config>;

/// Registered slots for one type name.
#[derive(Default, Clone, Copy)]
pub struct TypeEntry {
    generator: Option<GeneratorFn>,
    arg_parser: Option<ArgParserFn>,
}

impl TypeEntry {
    pub fn generator(&self) -> Option<GeneratorFn> {
        self.generator
    }

    pub fn arg_parser(&self) -> Option<ArgParserFn> {
        self.arg_parser
    }
}

/// Mapping from type name to its registered functions.
///
/// Built once at startup ([`Registry::builtin`]) and treated as
/// read-only once schema compilation begins. Additional types may be
/// registered before that point:
///
/// ```rust
/// use datagen::{Registry, Value};
///
/// let mut registry = Registry::builtin();
/// registry.register_generator("answer", |_, _| Ok(Value::Int(42)));
/// assert!(registry.lookup("answer").is_ok());
/// ```
#[derive(Default)]
pub struct Registry {
    entries: AHashMap<String, TypeEntry>,
}

impl Registry {
    /// Empty registry with no types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with all built-in types.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::types::register_builtins(&mut registry);
        registry
    }

    /// Bind a generator to `name`, preserving any registered argument
    /// parser for the same name.
    pub fn register_generator(&mut self, name: &str, generator: GeneratorFn) {
        self.entries.entry(name.to_string()).or_default().generator = Some(generator);
    }

    /// Bind an argument parser to `name`, preserving any registered
    /// generator for the same name.
    pub fn register_arg_parser(&mut self, name: &str, arg_parser: ArgParserFn) {
        self.entries.entry(name.to_string()).or_default().arg_parser = Some(arg_parser);
    }

    /// Look up the entry for `name`.
    pub fn lookup(&self, name: &str) -> Result<&TypeEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(_ctx: &mut GenContext, _config: &Config) -> Result<Value> {
        Ok(Value::Int(7))
    }

    fn parse_noop(_raw: Option<&str>) -> Result<Config> {
        Ok(Config::Raw(None))
    }

    #[test]
    fn test_lookup_unregistered_type_fails() {
        let registry = Registry::new();
        match registry.lookup("bogus") {
            Err(Error::TypeNotFound(name)) => assert_eq!(name, "bogus"),
            other => panic!("expected TypeNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_registration_order_is_irrelevant() {
        // Argument parser first, generator second.
        let mut registry = Registry::new();
        registry.register_arg_parser("custom", parse_noop);
        registry.register_generator("custom", fixed);

        let entry = registry.lookup("custom").unwrap();
        assert!(entry.generator().is_some());
        assert!(entry.arg_parser().is_some());

        // Generator first, argument parser second.
        let mut registry = Registry::new();
        registry.register_generator("custom", fixed);
        registry.register_arg_parser("custom", parse_noop);

        let entry = registry.lookup("custom").unwrap();
        assert!(entry.generator().is_some());
        assert!(entry.arg_parser().is_some());
    }

    #[test]
    fn test_reregistration_replaces_only_its_slot() {
        let mut registry = Registry::new();
        registry.register_generator("custom", fixed);
        registry.register_arg_parser("custom", parse_noop);
        registry.register_generator("custom", fixed);

        let entry = registry.lookup("custom").unwrap();
        assert!(entry.arg_parser().is_some());
    }

    #[test]
    fn test_builtin_registry_knows_all_types() {
        let registry = Registry::builtin();
        for name in [
            "bool",
            "int",
            "incrementing_int",
            "string",
            "randomset",
            "ipv4",
            "date",
            "datetime",
            "ssn",
            "firstname",
            "lastname",
            "zipcode",
            "state",
            "email",
            "words",
            "word",
            "lorem",
            "lorem-paragraph",
            "lorem-long",
        ] {
            let entry = registry.lookup(name).unwrap();
            assert!(entry.generator().is_some(), "no generator for {name}");
        }
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Str("abc".into()).to_string(), "abc");
    }
}
