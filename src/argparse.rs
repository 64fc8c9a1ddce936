//! Micro-parser for per-field type arguments.
//!
//! Arguments are comma-separated `key=value` pairs where a bare token
//! maps to no value: `before=2001-01-01, after=1945-01-01` or `flag`.
//! No escaping is supported; a value may not contain `,` or `=`.

use ahash::AHashMap;

/// Parse a raw argument string into a key/value map.
///
/// All spaces are stripped before parsing. A token without `=` maps to
/// `None`; an empty input yields an empty map.
pub fn parse_kv(raw: &str) -> AHashMap<String, Option<String>> {
    let stripped: String = raw.chars().filter(|c| *c != ' ').collect();
    let mut args = AHashMap::new();
    if stripped.is_empty() {
        return args;
    }

    for token in stripped.split(',') {
        match token.split_once('=') {
            Some((key, value)) => args.insert(key.to_string(), Some(value.to_string())),
            None => args.insert(token.to_string(), None),
        };
    }
    args
}
