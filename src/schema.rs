//! Schema-line parsing and the parse-once schema compiler.
//!
//! A schema line is `name type` or `name type[argument]`; blank lines
//! and lines starting with `#` are skipped. Field order defines output
//! column order. Compilation resolves each type against the registry
//! and parses its argument string exactly once, so argument errors
//! surface once per field at compile time, never per row.

use crate::error::{Error, Result};
use crate::registry::{Config, GenContext, GeneratorFn, Registry, Value};

/// One field declaration as parsed from a schema line.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub type_name: String,
    pub raw_arg: Option<String>,
}

/// A field whose argument has been parsed into a [`Config`], ready for
/// repeated generation.
pub struct CompiledField {
    name: String,
    generator: GeneratorFn,
    config: Config,
}

impl CompiledField {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce one value for this field.
    pub fn generate(&self, ctx: &mut GenContext) -> Result<Value> {
        (self.generator)(ctx, &self.config)
    }
}

/// Parse schema text into an ordered field list.
pub fn parse_schema(text: &str) -> Result<Vec<FieldSpec>> {
    let mut fields = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, spec) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::Argument(format!("schema line {line:?} has no type")))?;
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(Error::Argument(format!("schema line {line:?} has no type")));
        }

        let field = match spec.find('[') {
            Some(open) => {
                let type_name = spec[..open].trim();
                let raw_arg = spec[open + 1..].strip_suffix(']').ok_or_else(|| {
                    Error::Argument(format!("unterminated argument in schema line {line:?}"))
                })?;
                if type_name.is_empty() {
                    return Err(Error::Argument(format!("schema line {line:?} has no type")));
                }
                FieldSpec {
                    name: name.to_string(),
                    type_name: type_name.to_string(),
                    raw_arg: Some(raw_arg.to_string()),
                }
            }
            None => FieldSpec {
                name: name.to_string(),
                type_name: spec.to_string(),
                raw_arg: None,
            },
        };
        fields.push(field);
    }

    Ok(fields)
}

/// Resolve every field against the registry and parse its argument.
///
/// Output preserves input order and length. Fails with
/// [`Error::TypeNotFound`] for an unregistered type and propagates any
/// argument-parser error; on failure no compiled schema is produced.
pub fn compile(registry: &Registry, fields: &[FieldSpec]) -> Result<Vec<CompiledField>> {
    fields
        .iter()
        .map(|field| {
            let entry = registry.lookup(&field.type_name)?;
            let generator = entry
                .generator()
                .ok_or_else(|| Error::TypeNotFound(field.type_name.clone()))?;
            let config = match entry.arg_parser() {
                Some(parse_arg) => parse_arg(field.raw_arg.as_deref())?,
                None => Config::Raw(field.raw_arg.clone()),
            };
            Ok(CompiledField {
                name: field.name.clone(),
                generator,
                config,
            })
        })
        .collect()
}
