use serde::{Deserialize, Serialize};

/// Request body for DELETE /api/upload
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteImagesRequest {
    pub public_ids: Vec<String>,
}
