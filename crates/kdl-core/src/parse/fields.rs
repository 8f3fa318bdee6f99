//! Field accessors over `serde_json::Value` that report the field path on failure.

use serde_json::Value;

use super::ParseError;

pub(crate) fn parse_json(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Top-level array under `key`.
pub(crate) fn array<'a>(root: &'a Value, key: &str) -> Result<&'a [Value], ParseError> {
    match root.get(key) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(wrong_type(key.to_string(), "an array")),
        None => Err(missing(key.to_string())),
    }
}

/// String field `key` of the `index`-th entry of list `list`.
pub(crate) fn string<'a>(
    entry: &'a Value,
    list: &str,
    index: usize,
    key: &str,
) -> Result<&'a str, ParseError> {
    match entry.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(wrong_type(path(list, index, key), "a string")),
        None => Err(missing(path(list, index, key))),
    }
}

/// Integer field `key` of the `index`-th entry of list `list`.
pub(crate) fn integer(
    entry: &Value,
    list: &str,
    index: usize,
    key: &str,
) -> Result<i64, ParseError> {
    match entry.get(key) {
        Some(v) => v
            .as_i64()
            .ok_or_else(|| wrong_type(path(list, index, key), "an integer")),
        None => Err(missing(path(list, index, key))),
    }
}

fn path(list: &str, index: usize, key: &str) -> String {
    format!("{}[{}].{}", list, index, key)
}

fn missing(field: String) -> ParseError {
    ParseError::MissingField { field }
}

fn wrong_type(field: String, expected: &'static str) -> ParseError {
    ParseError::WrongType { field, expected }
}
