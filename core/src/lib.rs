//! # Storefront Core
//!
//! Domain layer for the storefront backend: catalog entities, the
//! declarative validation rule sets applied to API requests, repository
//! interfaces and the media store contract used for product imagery.

pub mod domain;
pub mod errors;
pub mod media;
pub mod repositories;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::{DomainError, DomainResult};
pub use media::{DeleteAck, InMemoryMediaStore, MediaError, MediaStore, UploadResult};
pub use repositories::{CatalogRepository, InMemoryCatalog};
