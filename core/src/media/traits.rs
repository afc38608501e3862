use async_trait::async_trait;
use std::path::Path;

use super::{DeleteAck, MediaError, UploadResult};

/// Forwarding boundary to the hosted image service
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload a local file into `folder`
    async fn upload(&self, path: &Path, folder: &str) -> Result<UploadResult, MediaError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| MediaError::Io(format!("{}: {}", path.display(), e)))?;
        self.upload_buffer(&bytes, folder).await
    }

    /// Upload an in-memory image into `folder`
    async fn upload_buffer(&self, bytes: &[u8], folder: &str) -> Result<UploadResult, MediaError>;

    /// Remove a previously issued asset
    async fn delete(&self, public_id: &str) -> Result<DeleteAck, MediaError>;

    /// Remove several assets in one request
    async fn delete_many(&self, public_ids: &[String]) -> Result<DeleteAck, MediaError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}
