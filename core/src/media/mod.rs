//! Media store contract for product and banner imagery.
//!
//! The store forwards image bytes to a hosted image service that resizes,
//! compresses and converts them, and removes assets it previously issued.
//! It holds no state of its own and never retries: every service failure
//! reaches the caller as a [`MediaError`].

mod memory;
mod traits;
mod types;

pub use memory::InMemoryMediaStore;
pub use traits::MediaStore;
pub use types::{
    DeleteAck, UploadResult, DEFAULT_FOLDER, DELIVERY_FORMAT, DELIVERY_QUALITY, MAX_DIMENSION,
    RESIZE_CROP_MODE, UPLOAD_TRANSFORMATION,
};

use thiserror::Error;

/// Failures reported by a media store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    /// One or more public ids are unknown to the service
    #[error("Media not found: {}", .0.join(", "))]
    NotFound(Vec<String>),

    /// The service answered with an error
    #[error("Media service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The service could not be reached
    #[error("Media service unreachable: {0}")]
    Transport(String),

    /// A local file could not be read
    #[error("Failed to read upload source: {0}")]
    Io(String),

    /// The payload was rejected before or by the service
    #[error("Invalid upload payload: {0}")]
    InvalidPayload(String),
}
