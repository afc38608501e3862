//! Domain-specific error types and error handling.

use thiserror::Error;

use crate::media::MediaError;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Input passed the request rules but violates a domain rule
    #[error("{message}")]
    Validation { message: String },

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
