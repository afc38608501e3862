//! Process-local media store used in development and tests

use async_trait::async_trait;
use serde_json::Map;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};

use super::{DeleteAck, MediaError, MediaStore, UploadResult};
use crate::domain::ObjectId;

/// Keeps uploaded images in a map keyed by public id.
///
/// Unknown ids fail deletion with [`MediaError::NotFound`], mirroring the
/// hosted service.
pub struct InMemoryMediaStore {
    assets: Mutex<HashMap<String, Vec<u8>>>,
    simulate_failure: AtomicBool,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self {
            assets: Mutex::new(HashMap::new()),
            simulate_failure: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail as if the service were down
    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    pub fn contains(&self, public_id: &str) -> bool {
        self.lock().contains_key(public_id)
    }

    pub fn asset_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned map only means a panicking test; the data is still usable
        self.assets.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), MediaError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(MediaError::Service {
                status: 503,
                message: "Simulated media service failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn upload_buffer(&self, bytes: &[u8], folder: &str) -> Result<UploadResult, MediaError> {
        self.check_available()?;
        if bytes.is_empty() {
            return Err(MediaError::InvalidPayload("Empty file".to_string()));
        }

        let public_id = format!("{}/{}", folder.trim_matches('/'), ObjectId::generate());
        self.lock().insert(public_id.clone(), bytes.to_vec());

        info!("Stored {} bytes as {}", bytes.len(), public_id);

        Ok(UploadResult {
            secure_url: format!("memory://{}", public_id),
            url: Some(format!("memory://{}", public_id)),
            public_id,
            format: None,
            width: None,
            height: None,
            bytes: Some(bytes.len() as u64),
            resource_type: Some("image".to_string()),
            extra: Map::new(),
        })
    }

    async fn delete(&self, public_id: &str) -> Result<DeleteAck, MediaError> {
        self.check_available()?;
        match self.lock().remove(public_id) {
            Some(_) => {
                debug!("Deleted {}", public_id);
                Ok(DeleteAck::deleted([public_id]))
            }
            None => Err(MediaError::NotFound(vec![public_id.to_string()])),
        }
    }

    /// Removes every known id; fails afterwards if any id was unknown
    async fn delete_many(&self, public_ids: &[String]) -> Result<DeleteAck, MediaError> {
        self.check_available()?;
        let mut assets = self.lock();
        let mut missing = Vec::new();
        for id in public_ids {
            if assets.remove(id).is_none() {
                missing.push(id.clone());
            }
        }
        drop(assets);

        if !missing.is_empty() {
            return Err(MediaError::NotFound(missing));
        }
        Ok(DeleteAck::deleted(public_ids.iter().cloned()))
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
