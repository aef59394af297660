//! Typed parameter extraction from a `serde_json::Value` object.
//!
//! A missing key yields the supplied default. A key that is present with
//! the wrong JSON type is a configuration error; it is never replaced by
//! the default behind the caller's back.

use serde_json::Value;

use crate::error::EngineError;

/// Extracts an `f64` from `params[name]`. JSON integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, EngineError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| mismatch(name, "number", v)),
    }
}

/// Extracts a non-negative integer from `params[name]`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> Result<usize, EngineError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| mismatch(name, "non-negative integer", v)),
    }
}

/// Extracts a string from `params[name]`.
pub fn param_string(params: &Value, name: &str, default: &str) -> Result<String, EngineError> {
    match params.get(name) {
        None => Ok(default.to_owned()),
        Some(v) => v
            .as_str()
            .map(String::from)
            .ok_or_else(|| mismatch(name, "string", v)),
    }
}

fn mismatch(name: &str, expected: &str, got: &Value) -> EngineError {
    EngineError::ParamTypeMismatch {
        name: name.to_owned(),
        expected: expected.to_owned(),
        got: json_type_name(got).to_owned(),
    }
}

/// Short JSON type label for error messages.
fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() && n.as_i64().is_some_and(|i| i < 0) => "negative integer",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
