//! Value encoders shared by the option setters.
//!
//! The mail API takes every parameter as text: addresses in the composed
//! `Name <address>` form, flags as `yes`/`no` and lists as a single CSV line.

use serde_json::Value;

use crate::error::{OptionsError, Result};

/// Compose a display name and an address as `Name <address>`.
///
/// The name is trimmed before composing; a missing or blank name yields
/// the bare address.
pub fn email_address(email: &str, name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => format!("{name} <{email}>"),
        _ => email.to_string(),
    }
}

/// The token the API uses for a boolean flag.
pub fn boolean_token(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Accept only a JSON `true`/`false`; numbers and strings are not coerced.
pub fn strict_boolean(field: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| OptionsError::InvalidBoolean {
        field: field.to_string(),
    })
}

/// Write `values` as one CSV record and return it without the line ending.
///
/// Fields holding a comma, a quote or a line break are quoted and inner
/// quotes are doubled. An empty list, or one holding a single empty value,
/// is the empty string.
pub fn csv_line<I, T>(values: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let values: Vec<T> = values.into_iter().collect();
    if values.len() <= 1 && values.iter().all(|v| v.as_ref().is_empty()) {
        return Ok(String::new());
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(values)
        .map_err(|e| OptionsError::Encoding(e.to_string()))?;
    let buf = writer
        .into_inner()
        .map_err(|e| OptionsError::Encoding(e.to_string()))?;
    let line = String::from_utf8(buf).map_err(|e| OptionsError::Encoding(e.to_string()))?;
    Ok(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
