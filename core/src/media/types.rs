use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Folder used when the caller does not name one
pub const DEFAULT_FOLDER: &str = "products";

/// Longest edge after the bounded resize
pub const MAX_DIMENSION: u32 = 1200;

/// Fit inside the bounding box, keep aspect ratio, never upscale
pub const RESIZE_CROP_MODE: &str = "limit";

pub const DELIVERY_QUALITY: &str = "auto";
pub const DELIVERY_FORMAT: &str = "auto";

/// Transformation requested on every upload
pub const UPLOAD_TRANSFORMATION: &str = "c_limit,h_1200,w_1200/q_auto/f_auto";

/// Result of a successful upload, passed through from the service.
///
/// Fields not modelled here are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub public_id: String,
    pub secure_url: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgment of a deletion; one entry per requested public id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub deleted: BTreeMap<String, String>,
}

impl DeleteAck {
    pub const DELETED: &'static str = "deleted";

    pub fn deleted<I, S>(public_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deleted: public_ids
                .into_iter()
                .map(|id| (id.into(), Self::DELETED.to_string()))
                .collect(),
        }
    }

    /// Whether `public_id` is covered by this acknowledgment
    pub fn covers(&self, public_id: &str) -> bool {
        self.deleted.contains_key(public_id)
    }
}
