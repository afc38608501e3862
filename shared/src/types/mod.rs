//! Type definitions module
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - API response wrappers

pub mod pagination;
pub mod response;

pub use pagination::{PageInfo, Pagination};
pub use response::ApiResponse;
