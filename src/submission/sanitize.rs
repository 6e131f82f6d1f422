//! # Input Parsing and Sanitization
//!
//! Turns an untrusted request body into a [`NewRecord`]:
//!
//! 1. transport checks (content type, empty body, JSON object)
//! 2. required fields, all missing names reported at once
//! 3. coercion and trimming of every field
//!
//! Nothing here touches the store.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::errors::{SubmissionError, SubmissionResult};
use crate::store::NewRecord;

/// Fields that must be present and non-blank, in reporting order
pub const REQUIRED_FIELDS: [&str; 2] = ["title", "category"];

/// Parsed request body
pub type Fields = Map<String, Value>;

/// True for `application/json` and `application/*+json`, parameters ignored
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", "json")) => true,
        Some(("application", subtype)) => subtype.ends_with("+json"),
        _ => false,
    }
}

/// Check the transport framing and parse the body into a JSON object
pub fn parse_body(body: &[u8], content_type: Option<&str>) -> SubmissionResult<Fields> {
    if !content_type.map(is_json_content_type).unwrap_or(false) {
        return Err(SubmissionError::invalid_input(
            "Content-Type must be application/json",
        ));
    }

    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(SubmissionError::invalid_input("Empty request body"));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| SubmissionError::invalid_input(format!("Malformed JSON body: {}", e)))?;

    into_fields(value)
}

/// Accept an already-parsed JSON value as a submission body
pub fn into_fields(value: Value) -> SubmissionResult<Fields> {
    match value {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(SubmissionError::invalid_input("Empty request body")),
        _ => Err(SubmissionError::invalid_input(
            "Request body must be a JSON object",
        )),
    }
}

/// String form of a JSON value; `None` for null
pub fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        // Numbers, booleans, arrays and objects use their compact JSON text
        other => Some(other.to_string()),
    }
}

/// Trimmed text of a field; `None` when absent, null or blank
fn trimmed_text(fields: &Fields, name: &str) -> Option<String> {
    fields
        .get(name)
        .and_then(coerce_to_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Names of required fields that are absent or blank
pub fn missing_fields(fields: &Fields) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|name| trimmed_text(fields, name).is_none())
        .map(|name| name.to_string())
        .collect()
}

/// Coerce the optional numeric `value` field
pub fn coerce_value(raw: Option<&Value>) -> SubmissionResult<Option<f64>> {
    let parsed = match raw {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let shown = raw.map(Value::to_string).unwrap_or_default();
    match parsed {
        Some(v) if v.is_finite() => Ok(Some(v)),
        Some(_) => Err(SubmissionError::validation(
            "value",
            format!("value must be a finite number, got {}", shown),
        )),
        None => Err(SubmissionError::validation(
            "value",
            format!("could not convert value {} to a number", shown),
        )),
    }
}

/// Server receipt time as stored in records
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Validate and sanitize a parsed body received at `received_at`
pub fn sanitize(fields: &Fields, received_at: DateTime<Utc>) -> SubmissionResult<NewRecord> {
    let missing = missing_fields(fields);
    if !missing.is_empty() {
        return Err(SubmissionError::MissingFields(missing));
    }

    let value = coerce_value(fields.get("value"))?;
    let received_at = format_timestamp(received_at);

    // Client timestamps pass through untouched; blank ones fall back to receipt time
    let timestamp = fields
        .get("timestamp")
        .and_then(coerce_to_string)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| received_at.clone());

    Ok(NewRecord {
        title: trimmed_text(fields, "title").unwrap_or_default(),
        description: trimmed_text(fields, "description"),
        category: trimmed_text(fields, "category").unwrap_or_default(),
        value,
        memo: trimmed_text(fields, "memo"),
        timestamp,
        received_at,
    })
}
