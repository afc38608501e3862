//! API response wrappers

use serde::{Deserialize, Serialize};

use super::pagination::PageInfo;

/// Standard success response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`; failures use the error envelopes instead
    pub success: bool,

    pub data: T,

    /// Present on list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            pagination: None,
        }
    }

    /// Create a successful list response
    pub fn paginated(data: T, pagination: PageInfo) -> Self {
        Self {
            success: true,
            data,
            pagination: Some(pagination),
        }
    }
}
