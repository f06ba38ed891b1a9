//! Helpers for TEXT columns that hold a JSON document.
//!
//! `profiles.colors` and `project_data.sensor_data` are stored as
//! JSON-encoded strings. They are validated at write time and returned
//! decoded at read time, so `"[[0,0,255]]"` in the store serializes as
//! nested arrays in API responses.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Validate that `value` parses as a JSON document.
///
/// `field` names the offending field in the error message.
pub fn validate_json_text(field: &str, value: &str) -> Result<(), String> {
    match serde_json::from_str::<Value>(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(format!("{field} must be a valid JSON document")),
    }
}

/// Decode a stored JSON text to a structured value.
///
/// Rows written before validation existed (or out of band) may hold text
/// that no longer parses; those fall back to the raw string.
pub fn decode_or_raw(value: &str) -> Value {
    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
}

/// Serde helper: serialize a required JSON-text column decoded.
pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    decode_or_raw(value).serialize(serializer)
}

/// Serde helper: serialize an optional JSON-text column decoded.
pub fn serialize_opt<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(text) => decode_or_raw(text).serialize(serializer),
        None => serializer.serialize_none(),
    }
}
