//! Free-text field types: `string` and `randomset`.

use rand::Rng;

use crate::error::{Error, Result};
use crate::registry::{Config, GenContext, Registry, Value};
use crate::types::random_letters;

pub(crate) fn register(registry: &mut Registry) {
    registry.register_generator("string", string_field);
    registry.register_arg_parser("string", string_arg);
    registry.register_generator("randomset", randomset_field);
    registry.register_arg_parser("randomset", randomset_arg);
}

fn string_arg(raw: Option<&str>) -> Result<Config> {
    let raw = raw
        .ok_or_else(|| Error::Argument("string requires a length, e.g. string[8]".to_string()))?;
    let length: usize = raw.trim().parse().map_err(|_| {
        Error::Argument(format!("string length must be a non-negative integer, got {raw:?}"))
    })?;
    Ok(Config::Length(length))
}

fn string_field(ctx: &mut GenContext, config: &Config) -> Result<Value> {
    match config {
        Config::Length(length) => Ok(Value::Str(random_letters(&mut ctx.rng, *length))),
        other => Err(Error::Generation(format!(
            "string invoked with mismatched config {other:?}"
        ))),
    }
}

/// Split on `,`; empty tokens are kept as empty-string members.
fn randomset_arg(raw: Option<&str>) -> Result<Config> {
    let raw = raw.ok_or_else(|| {
        Error::Argument("randomset requires a choice set, e.g. randomset[a,b,c]".to_string())
    })?;
    let choices = raw.split(',').map(str::to_string).collect();
    Ok(Config::Choices(choices))
}

fn randomset_field(ctx: &mut GenContext, config: &Config) -> Result<Value> {
    match config {
        Config::Choices(choices) => {
            let choice = &choices[ctx.rng.gen_range(0..choices.len())];
            Ok(Value::Str(choice.clone()))
        }
        other => Err(Error::Generation(format!(
            "randomset invoked with mismatched config {other:?}"
        ))),
    }
}
