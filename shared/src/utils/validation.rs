//! Field validation primitives
//!
//! Checks here operate on raw JSON values so that a request can be
//! inspected before it is deserialized into a typed DTO. Query and path
//! parameters arrive as strings, so numeric and boolean checks also accept
//! their textual forms.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collection of validation errors, in evaluation order
#[derive(Debug, Default, Clone)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add(FieldError::new(field, message));
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Whether any entry names `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Storage-layer document identifier: 12 bytes, hex encoded
static OBJECT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").unwrap());

/// Common validation functions
pub mod validators {
    use super::*;
    use validator::ValidateUrl;

    /// Absent, `null` and empty/blank strings all count as "not provided"
    pub fn is_blank(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        }
    }

    /// Number of characters, not bytes
    pub fn char_len(value: &str) -> usize {
        value.chars().count()
    }

    /// A string that is non-empty after trimming and at most `max` characters
    pub fn non_empty_string(value: &Value, max: usize) -> bool {
        match value.as_str() {
            Some(s) => !s.trim().is_empty() && char_len(s.trim()) <= max,
            None => false,
        }
    }

    /// Any string of at most `max` characters
    pub fn string_max(value: &Value, max: usize) -> bool {
        value.as_str().is_some_and(|s| char_len(s.trim()) <= max)
    }

    /// Numeric value, accepting numeric strings
    pub fn as_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Integral value, accepting integer strings
    pub fn as_integer(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Boolean value, accepting `"true"`/`"false"`
    pub fn as_boolean(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn number_in_range(value: &Value, min: Option<f64>, max: Option<f64>) -> bool {
        as_number(value).is_some_and(|n| {
            min.map_or(true, |min| n >= min) && max.map_or(true, |max| n <= max)
        })
    }

    pub fn integer_in_range(value: &Value, min: Option<i64>, max: Option<i64>) -> bool {
        as_integer(value).is_some_and(|n| {
            min.map_or(true, |min| n >= min) && max.map_or(true, |max| n <= max)
        })
    }

    pub fn is_object_id(value: &Value) -> bool {
        value.as_str().is_some_and(is_object_id_str)
    }

    pub fn is_object_id_str(value: &str) -> bool {
        OBJECT_ID.is_match(value)
    }

    /// Absolute http(s) URL
    pub fn is_url(value: &Value) -> bool {
        value.as_str().is_some_and(|s| {
            let s = s.trim();
            (s.starts_with("http://") || s.starts_with("https://")) && s.validate_url()
        })
    }

    pub fn is_array(value: &Value) -> bool {
        value.is_array()
    }
}
