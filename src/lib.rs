//! Schema-driven synthetic data generator.
//!
//! A schema is an ordered list of field declarations, one per line:
//!
//! ```text
//! #name      type[argument]
//! id         int[6]
//! first      firstname
//! dob        date[after=1945-01-01, before=2001-01-01]
//! language   randomset[python,ruby,go,rust]
//! ```
//!
//! Compilation resolves each type name against a [`Registry`] and parses
//! the per-field argument string exactly once; generation then invokes
//! each compiled field's generator once per row.
//!
//! # Example
//!
//! ```rust
//! use datagen::{compile, parse_schema, Registry, RowGenerator};
//!
//! let fields = parse_schema("id int[6]\nactive bool").unwrap();
//! let registry = Registry::builtin();
//! let compiled = compile(&registry, &fields).unwrap();
//!
//! let mut gen = RowGenerator::with_seed(&compiled, 42);
//! let rows = gen.generate(5).unwrap();
//! assert_eq!(rows.len(), 5);
//! ```

pub mod argparse;
pub mod error;
pub mod registry;
pub mod rows;
pub mod schema;
pub mod types;
pub mod writer;

pub use error::{Error, Result};
pub use registry::{Config, GenContext, Registry, Value};
pub use rows::{Row, RowGenerator};
pub use schema::{compile, parse_schema, CompiledField, FieldSpec};
