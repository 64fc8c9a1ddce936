//! Date and datetime field types with required `before`/`after`
//! bounds, interpolated uniformly on epoch seconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rand::Rng;

use crate::argparse::parse_kv;
use crate::error::{Error, Result};
use crate::registry::{Config, GenContext, Registry, Value};

pub(crate) fn register(registry: &mut Registry) {
    registry.register_generator("date", date_field);
    registry.register_arg_parser("date", date_arg);
    registry.register_generator("datetime", datetime_field);
    registry.register_arg_parser("datetime", datetime_arg);
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn date_arg(raw: Option<&str>) -> Result<Config> {
    bounds(raw, "date", |s| {
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|e| Error::Argument(format!("date bound {s:?} is not YYYY-MM-DD: {e}")))?;
        Ok(date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp())
    })
}

fn datetime_arg(raw: Option<&str>) -> Result<Config> {
    bounds(raw, "datetime", |s| {
        let dt = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).map_err(|e| {
            Error::Argument(format!("datetime bound {s:?} is not YYYY-MM-DDTHH:MM:SS: {e}"))
        })?;
        Ok(dt.and_utc().timestamp())
    })
}

/// Extract the required `before` and `after` keys and parse each bound
/// to epoch seconds with `parse_instant`.
fn bounds(
    raw: Option<&str>,
    type_name: &str,
    parse_instant: impl Fn(&str) -> Result<i64>,
) -> Result<Config> {
    let args = parse_kv(raw.unwrap_or(""));
    let bound = |key: &str| -> Result<i64> {
        let value = args.get(key).and_then(|v| v.as_deref()).ok_or_else(|| {
            Error::Argument(format!(
                "{type_name} field is missing required argument \"{key}\""
            ))
        })?;
        parse_instant(value)
    };
    let before = bound("before")?;
    let after = bound("after")?;
    Ok(Config::TimeRange { before, after })
}

/// `before + r * (after - before)` with r in [0, 1); the span is
/// negative when `after` precedes `before`.
fn interpolate(ctx: &mut GenContext, before: i64, after: i64) -> i64 {
    let r: f64 = ctx.rng.gen();
    before + ((after - before) as f64 * r) as i64
}

fn render(t: i64, format: &str) -> Result<Value> {
    let dt = DateTime::from_timestamp(t, 0)
        .ok_or_else(|| Error::Generation(format!("timestamp {t} is out of range")))?;
    Ok(Value::Str(dt.format(format).to_string()))
}

fn date_field(ctx: &mut GenContext, config: &Config) -> Result<Value> {
    match config {
        Config::TimeRange { before, after } => {
            render(interpolate(ctx, *before, *after), DATE_FORMAT)
        }
        other => Err(Error::Generation(format!(
            "date invoked with mismatched config {other:?}"
        ))),
    }
}

fn datetime_field(ctx: &mut GenContext, config: &Config) -> Result<Value> {
    match config {
        Config::TimeRange { before, after } => {
            render(interpolate(ctx, *before, *after), DATETIME_FORMAT)
        }
        other => Err(Error::Generation(format!(
            "datetime invoked with mismatched config {other:?}"
        ))),
    }
}
