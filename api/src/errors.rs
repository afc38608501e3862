//! API failure type rendered by the error responder.
//!
//! Handlers return `Result<HttpResponse, ApiError>`. The failure carries an
//! optional status, a message, optional structured data and the error chain
//! that produced it; [`crate::middleware::error_handler::ErrorResponder`]
//! turns it into the `{message, stack, data}` envelope.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::{json, Value};
use thiserror::Error;

use sf_core::{DomainError, MediaError};
use sf_shared::ErrorEnvelope;

/// Status sent for a failure that carries no usable status of its own.
///
/// A failure that still holds `200 OK` has never had its status set.
pub fn resolve_status(status: StatusCode) -> StatusCode {
    if status == StatusCode::OK {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        status
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<StatusCode>,
    pub message: String,
    pub data: Option<Value>,
    cause: Option<anyhow::Error>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
            data: None,
            cause: None,
        }
    }

    /// Failure without a status; rendered as 500
    pub fn unhandled(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            data: None,
            cause: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Failure raised for a route nothing matched
    pub fn not_found(path: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("Not Found - {}", path))
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<anyhow::Error>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Debug trace of the failure: its message followed by the cause chain
    pub fn trace(&self) -> String {
        match &self.cause {
            Some(cause) => format!("ApiError: {}\n\nCaused by:\n    {:?}", self.message, cause),
            None => format!("ApiError: {}", self.message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        resolve_status(self.status.unwrap_or(StatusCode::OK))
    }

    fn error_response(&self) -> HttpResponse {
        let envelope = ErrorEnvelope::new(self.message.clone(), self.trace(), self.data.clone(), false);
        HttpResponse::build(self.status_code()).json(envelope)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ApiError::new(StatusCode::NOT_FOUND, err.to_string()),
            DomainError::Validation { .. } => ApiError::bad_request(err.to_string()),
            DomainError::Media(media) => media.into(),
            DomainError::Internal { .. } => {
                ApiError::unhandled(err.to_string()).with_cause(err)
            }
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        let (status, data) = match &err {
            MediaError::NotFound(ids) => (StatusCode::NOT_FOUND, Some(json!({ "publicIds": ids }))),
            MediaError::Service { status, .. } => {
                (StatusCode::BAD_GATEWAY, Some(json!({ "serviceStatus": status })))
            }
            MediaError::Transport(_) => (StatusCode::BAD_GATEWAY, None),
            MediaError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, None),
            MediaError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        let mut api_error = ApiError::new(status, err.to_string()).with_cause(err);
        api_error.data = data;
        api_error
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid request body: {}", err)).with_cause(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_status_resolves_to_500() {
        assert_eq!(
            ApiError::unhandled("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::new(StatusCode::OK, "boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::new(StatusCode::CONFLICT, "taken").status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::not_found("/api/nope?x=1");
        assert_eq!(err.message, "Not Found - /api/nope?x=1");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_domain_error_mapping() {
        let err: ApiError = DomainError::not_found("Product").into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Product not found");

        let err: ApiError = DomainError::validation("Category not found").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Category not found");

        let err: ApiError = DomainError::Internal {
            message: "lock poisoned".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_media_error_mapping() {
        let err: ApiError = MediaError::NotFound(vec!["products/a".to_string()]).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.data, Some(json!({ "publicIds": ["products/a"] })));

        let err: ApiError = MediaError::Service {
            status: 401,
            message: "Invalid Signature".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert!(err.message.contains("Invalid Signature"));
        assert!(err.trace().contains("Caused by"));
    }
}
