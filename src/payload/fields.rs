//! Field access helpers over untyped JSON.
//!
//! Numbers follow JSON semantics rather than Rust storage: `5` and `5.0` are
//! both the integer five, and an integer too large for `i64` still counts as
//! an integer (saturated).

use serde_json::{Map, Value};

/// Look up a key, treating an explicit `null` as absent.
pub fn non_null<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

/// The string content if `value` is a string with non-whitespace content.
pub fn non_blank_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

/// The integer value of a JSON number with no fractional part.
pub fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if value.as_u64().is_some() {
        return Some(i64::MAX);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

/// An integer strictly greater than zero.
pub fn as_positive_integer(value: &Value) -> Option<u64> {
    as_integer(value).filter(|n| *n > 0).map(|n| n as u64)
}

/// Round half toward positive infinity (`Math.round` behaviour).
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Render a value for inclusion in an error message.
///
/// Strings appear raw and arrays as their elements joined by `,`, the way the
/// quiz client prints them. A missing value renders as `null`; objects and
/// other scalars render as JSON text.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

pub fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
