//! Shared utilities and common types for the storefront server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error envelopes returned by the API
//! - Response wrappers and pagination
//! - Field validation primitives

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, Environment, MediaConfig, ServerConfig};
pub use errors::{ErrorEnvelope, ValidationFailure, STACK_PLACEHOLDER};
pub use types::{ApiResponse, PageInfo, Pagination};
pub use utils::validation;
