//! Cloudinary Media Store Implementation
//!
//! Uploads go to the signed upload API as base64 data URIs with an
//! incoming transformation (bounded resize, automatic quality and format).
//! Single deletions use the signed `destroy` endpoint; bulk deletions use
//! the admin API with basic auth.
//!
//! No call is retried. Every non-success answer, including a `not found`
//! deletion result, is returned as a [`MediaError`].

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::{debug, error, info};

use sf_core::media::UPLOAD_TRANSFORMATION;
use sf_core::{DeleteAck, MediaError, MediaStore, UploadResult};
use sf_shared::config::MediaConfig;

use super::signing::{sign, SIGNATURE_ALGORITHM};
use crate::InfrastructureError;

/// Cloudinary account configuration
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// API root, e.g. `https://api.cloudinary.com/v1_1`
    pub api_base: String,
    pub request_timeout_secs: u64,
}

impl CloudinaryConfig {
    /// Build from the shared media configuration, requiring credentials
    pub fn from_media_config(config: &MediaConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET must be set"
                    .to_string(),
            ));
        }

        Ok(Self {
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            request_timeout_secs: config.timeout_secs,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.api_base, self.cloud_name, path)
    }
}

/// Cloudinary-backed media store
pub struct CloudinaryMediaStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryMediaStore {
    pub fn new(config: CloudinaryConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Parameters for a signed request: adds timestamp, key and signature
    fn signed_params(&self, mut params: BTreeMap<String, String>) -> BTreeMap<String, String> {
        params.insert(
            "timestamp".to_string(),
            chrono::Utc::now().timestamp().to_string(),
        );
        let signature = sign(&params, &self.config.api_secret);
        params.insert("signature".to_string(), signature);
        params.insert(
            "signature_algorithm".to_string(),
            SIGNATURE_ALGORITHM.to_string(),
        );
        params.insert("api_key".to_string(), self.config.api_key.clone());
        params
    }

    async fn post_form(
        &self,
        path: &str,
        form: &BTreeMap<String, String>,
    ) -> Result<(u16, String), MediaError> {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .form(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok((status, body))
    }
}

/// Upload parameters that take part in the signature
pub fn upload_params(folder: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert("folder".to_string(), folder.to_string());
    params.insert("transformation".to_string(), UPLOAD_TRANSFORMATION.to_string());
    params
}

/// Encode bytes as a data URI the upload API accepts as `file`
pub fn data_uri(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", sniff_mime(bytes), STANDARD.encode(bytes))
}

/// Best-effort MIME type from magic bytes
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct DestroyBody {
    result: String,
}

#[derive(Debug, Deserialize)]
struct BulkDeleteBody {
    deleted: HashMap<String, String>,
}

fn transport_error(e: reqwest::Error) -> MediaError {
    MediaError::Transport(e.to_string())
}

/// Map a non-success answer to [`MediaError::Service`]
fn service_error(status: u16, body: &str) -> MediaError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    MediaError::Service { status, message }
}

fn decode<T: for<'de> Deserialize<'de>>(status: u16, body: &str) -> Result<T, MediaError> {
    serde_json::from_str(body).map_err(|e| MediaError::Service {
        status,
        message: format!("Unexpected response body: {}", e),
    })
}

pub(crate) fn parse_upload_response(status: u16, body: &str) -> Result<UploadResult, MediaError> {
    if !(200..300).contains(&status) {
        return Err(service_error(status, body));
    }
    decode(status, body)
}

pub(crate) fn parse_destroy_response(
    status: u16,
    body: &str,
    public_id: &str,
) -> Result<DeleteAck, MediaError> {
    if !(200..300).contains(&status) {
        return Err(service_error(status, body));
    }
    let parsed: DestroyBody = decode(status, body)?;
    match parsed.result.as_str() {
        "ok" => Ok(DeleteAck::deleted([public_id])),
        "not found" => Err(MediaError::NotFound(vec![public_id.to_string()])),
        other => Err(MediaError::Service {
            status,
            message: format!("Unexpected destroy result: {}", other),
        }),
    }
}

pub(crate) fn parse_bulk_delete_response(
    status: u16,
    body: &str,
    public_ids: &[String],
) -> Result<DeleteAck, MediaError> {
    if !(200..300).contains(&status) {
        return Err(service_error(status, body));
    }
    let parsed: BulkDeleteBody = decode(status, body)?;

    let missing: Vec<String> = public_ids
        .iter()
        .filter(|id| parsed.deleted.get(*id).map_or(true, |state| state == "not_found"))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(MediaError::NotFound(missing));
    }

    Ok(DeleteAck {
        deleted: parsed.deleted.into_iter().collect(),
    })
}

#[async_trait]
impl MediaStore for CloudinaryMediaStore {
    async fn upload_buffer(&self, bytes: &[u8], folder: &str) -> Result<UploadResult, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::InvalidPayload("Empty file".to_string()));
        }

        let mut form = self.signed_params(upload_params(folder));
        form.insert("file".to_string(), data_uri(bytes));

        debug!("Uploading {} bytes to folder {}", bytes.len(), folder);
        let (status, body) = self.post_form("image/upload", &form).await?;

        match parse_upload_response(status, &body) {
            Ok(result) => {
                info!("Uploaded image {} ({})", result.public_id, result.secure_url);
                Ok(result)
            }
            Err(e) => {
                error!("Image upload failed: {}", e);
                Err(e)
            }
        }
    }

    async fn delete(&self, public_id: &str) -> Result<DeleteAck, MediaError> {
        let mut params = BTreeMap::new();
        params.insert("public_id".to_string(), public_id.to_string());
        params.insert("invalidate".to_string(), "true".to_string());
        let form = self.signed_params(params);

        let (status, body) = self.post_form("image/destroy", &form).await?;
        let ack = parse_destroy_response(status, &body, public_id)?;
        info!("Deleted image {}", public_id);
        Ok(ack)
    }

    async fn delete_many(&self, public_ids: &[String]) -> Result<DeleteAck, MediaError> {
        if public_ids.is_empty() {
            return Err(MediaError::InvalidPayload("No public ids given".to_string()));
        }

        let query: Vec<(&str, &str)> = public_ids
            .iter()
            .map(|id| ("public_ids[]", id.as_str()))
            .collect();

        let response = self
            .client
            .delete(self.config.endpoint("resources/image/upload"))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        let ack = parse_bulk_delete_response(status, &body, public_ids)?;
        info!("Deleted {} images", ack.deleted.len());
        Ok(ack)
    }

    fn provider_name(&self) -> &'static str {
        "cloudinary"
    }
}
