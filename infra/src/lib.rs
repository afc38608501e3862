//! # Infrastructure Layer
//!
//! Concrete implementations of the external services the storefront
//! depends on. Today that is the hosted image service behind the
//! [`sf_core::MediaStore`] contract.
//!
//! ## Features
//!
//! - `cloudinary`: Enable the Cloudinary media store (default)

/// Media store module - hosted image service providers
pub mod media;

pub use media::create_media_store;

use sf_core::MediaError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction or request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Media service error
    #[error(transparent)]
    Media(#[from] MediaError),
}
