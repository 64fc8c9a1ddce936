//! Numeric and digit-string field types: `bool`, `int`,
//! `incrementing_int`, `ssn`, `zipcode`.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::registry::{Config, GenContext, Registry, Value};

pub(crate) fn register(registry: &mut Registry) {
    registry.register_generator("bool", bool_field);
    registry.register_generator("int", int_field);
    registry.register_arg_parser("int", int_arg);
    registry.register_generator("incrementing_int", incrementing_int_field);
    registry.register_generator("ssn", ssn_field);
    registry.register_generator("zipcode", zipcode_field);
}

fn bool_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Ok(Value::Int(ctx.rng.gen_range(0..2)))
}

/// Argument is a digit count D; the compiled config is the exclusive
/// bound `10^D - 1`, so `int[6]` yields values in [0, 999999).
fn int_arg(raw: Option<&str>) -> Result<Config> {
    let raw = raw
        .ok_or_else(|| Error::Argument("int requires a digit count, e.g. int[6]".to_string()))?;
    let digits: u32 = raw.trim().parse().map_err(|_| {
        Error::Argument(format!("int digit count must be a positive integer, got {raw:?}"))
    })?;
    if digits == 0 {
        return Err(Error::Argument(
            "int digit count must be at least 1".to_string(),
        ));
    }
    // i64 holds every value below 10^18 - 1; larger counts would wrap.
    if digits > 18 {
        return Err(Error::Argument(format!(
            "int digit count {digits} is too large (max 18)"
        )));
    }
    Ok(Config::Bound(10u64.pow(digits) - 1))
}

fn int_field(ctx: &mut GenContext, config: &Config) -> Result<Value> {
    match config {
        Config::Bound(bound) => Ok(Value::Int(ctx.rng.gen_range(0..*bound) as i64)),
        other => Err(Error::Generation(format!(
            "int invoked with mismatched config {other:?}"
        ))),
    }
}

/// Process-wide counter; exactly one increment per generation call,
/// never reset during a run.
static NEXT_INCREMENT: AtomicU64 = AtomicU64::new(0);

fn incrementing_int_field(_ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    let value = NEXT_INCREMENT.fetch_add(1, Ordering::SeqCst) + 1;
    Ok(Value::Int(value as i64))
}

fn ssn_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    let area: u32 = ctx.rng.gen_range(1..999);
    let group: u32 = ctx.rng.gen_range(1..99);
    let serial: u32 = ctx.rng.gen_range(1..9999);
    Ok(Value::Str(format!("{area:03}-{group:02}-{serial:04}")))
}

fn zipcode_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    let digits: String = (0..5)
        .map(|_| char::from_digit(ctx.rng.gen_range(0..9), 10).unwrap())
        .collect();
    Ok(Value::Str(digits))
}
