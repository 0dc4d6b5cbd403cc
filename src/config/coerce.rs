// src/config/coerce.rs

//! Environment overrides and lenient type coercion.
//!
//! Coercion never fails: a value that cannot be converted is handed back
//! unchanged so the type check in `validate.rs` can report it.

use toml::Value;

use crate::config::model::RawConfig;
use crate::env::Environment;

/// Derive the environment variable name for a config option.
///
/// Splits before every ASCII uppercase letter, joins with `_`, uppercases:
/// `eventStoragePath` → `EVENT_STORAGE_PATH`.
pub fn envify(option: &str) -> String {
    let mut out = String::with_capacity(option.len() + 4);
    for (i, ch) in option.char_indices() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.extend(ch.to_uppercase());
    }
    out
}

/// `"true"` / `"false"` in any case become booleans.
pub fn try_parse_bool(value: Value) -> Value {
    match value {
        Value::String(s) if s.eq_ignore_ascii_case("true") => Value::Boolean(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Value::Boolean(false),
        other => other,
    }
}

/// Numeric strings become numbers. Integers stay integers.
///
/// Empty and whitespace-only strings are not numeric here and pass through
/// unchanged, unlike JavaScript's `Number("")`, which yields `0`. An empty
/// `PORT` therefore fails validation instead of binding port 0.
pub fn try_parse_number(value: Value) -> Value {
    match value {
        Value::String(s) => parse_numeric_string(s),
        other => other,
    }
}

fn parse_numeric_string(s: String) -> Value {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Value::String(s);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Integer(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Float(n),
        _ => Value::String(s),
    }
}

/// Leaves a value as it is.
pub fn identity(value: Value) -> Value {
    value
}

/// Resolve `option` from the environment first, then from the raw record,
/// and run the result through `coerce`. `None` when neither is set.
pub fn resolve_override(
    option: &str,
    env: &dyn Environment,
    raw: &RawConfig,
    coerce: fn(Value) -> Value,
) -> Option<Value> {
    let value = match env.var(&envify(option)) {
        Some(from_env) => Value::String(from_env),
        None => raw.get(option)?.clone(),
    };
    Some(coerce(value))
}
