//! Shared error envelopes returned by every API endpoint

use serde::{Deserialize, Serialize};

use crate::utils::validation::FieldError;

/// Value sent in place of the failure trace when traces are hidden
pub const STACK_PLACEHOLDER: &str = "🥞";

/// Uniform JSON body for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable failure message
    pub message: String,

    /// Failure trace, or [`STACK_PLACEHOLDER`] when traces are hidden
    pub stack: String,

    /// Structured payload attached to the failure
    pub data: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Build an envelope, exposing `trace` only when `expose_trace` is set
    pub fn new(
        message: impl Into<String>,
        trace: impl Into<String>,
        data: Option<serde_json::Value>,
        expose_trace: bool,
    ) -> Self {
        Self {
            message: message.into(),
            stack: if expose_trace {
                trace.into()
            } else {
                STACK_PLACEHOLDER.to_string()
            },
            data,
        }
    }
}

/// Body of the 400 response produced by the validation gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Always `false`
    pub success: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}
