//! Media Store Module
//!
//! Implementations of [`MediaStore`] and the factory selecting one from
//! configuration.
//!
//! - **Cloudinary**: signed upload/destroy calls and admin bulk deletion
//! - **Memory**: the core in-memory store, for development

use std::sync::Arc;
use tracing::{info, warn};

use sf_core::{InMemoryMediaStore, MediaStore};
use sf_shared::config::{MediaConfig, MediaProvider};

use crate::InfrastructureError;

#[cfg(feature = "cloudinary")]
pub mod cloudinary;
#[cfg(feature = "cloudinary")]
pub mod signing;

#[cfg(feature = "cloudinary")]
pub use cloudinary::{CloudinaryConfig, CloudinaryMediaStore};

#[cfg(test)]
mod tests;

/// Create a media store based on configuration
///
/// A Cloudinary provider without credentials is a configuration error.
pub fn create_media_store(config: &MediaConfig) -> Result<Arc<dyn MediaStore>, InfrastructureError> {
    match config.provider {
        MediaProvider::Memory => {
            warn!("Using in-memory media store; uploads are not persisted");
            Ok(Arc::new(InMemoryMediaStore::new()))
        }
        #[cfg(feature = "cloudinary")]
        MediaProvider::Cloudinary => {
            let store = CloudinaryMediaStore::new(CloudinaryConfig::from_media_config(config)?)?;
            info!("Cloudinary media store initialized for cloud {}", config.cloud_name);
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "cloudinary"))]
        MediaProvider::Cloudinary => Err(InfrastructureError::Config(
            "Cloudinary support is not compiled in".to_string(),
        )),
    }
}
