use serde_json::Value;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("{0} cannot be converted to a number")]
    UnsupportedType(&'static str),

    #[error("'{0}' is not a numeric literal")]
    InvalidLiteral(String),
}

/// Converts a loosely-typed value to `f64`.
///
/// Numbers convert directly and booleans become `1.0` / `0.0`. Strings are
/// trimmed and parsed as a decimal float literal (`"2.5"`, `" -1e3 "`,
/// `"inf"`, `"1_000"`). `null`, arrays and objects always fail.
pub fn parse_number(value: &Value) -> Result<f64, ConversionError> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| ConversionError::InvalidLiteral(number.to_string())),
        Value::Bool(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
        Value::String(text) => parse_literal(text),
        Value::Null => Err(ConversionError::UnsupportedType("null")),
        Value::Array(_) => Err(ConversionError::UnsupportedType("array")),
        Value::Object(_) => Err(ConversionError::UnsupportedType("object")),
    }
}

fn parse_literal(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    let invalid = || ConversionError::InvalidLiteral(text.to_string());

    let cleaned = strip_digit_separators(trimmed).ok_or_else(invalid)?;
    cleaned.parse::<f64>().map_err(|_| invalid())
}

// `_` 只允許夾在兩個數字之間
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let mut cleaned = String::with_capacity(text.len());
    for (index, ch) in text.char_indices() {
        if ch == '_' {
            let before = index.checked_sub(1).map(|i| bytes[i]);
            let after = bytes.get(index + 1).copied();
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        cleaned.push(ch);
    }
    Some(Cow::Owned(cleaned))
}
