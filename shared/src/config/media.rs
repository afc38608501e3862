//! Hosted image service configuration

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Which media store backs image uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaProvider {
    /// Cloudinary upload and admin APIs
    Cloudinary,
    /// Process-local store, used in development and tests
    #[default]
    Memory,
}

impl std::str::FromStr for MediaProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cloudinary" => Ok(MediaProvider::Cloudinary),
            "memory" | "mock" => Ok(MediaProvider::Memory),
            _ => Err(format!("Invalid media provider: {}", s)),
        }
    }
}

/// Credentials and client settings for the image service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    pub provider: MediaProvider,

    /// Cloud name used in API paths
    #[serde(default)]
    pub cloud_name: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub api_secret: String,

    /// Base URL of the service API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            provider: MediaProvider::default(),
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MediaConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to the in-memory provider when `MEDIA_PROVIDER` is unset
    /// or unparseable.
    pub fn from_env() -> Self {
        let provider = match env::var("MEDIA_PROVIDER") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                warn!("{}, using the in-memory media store", e);
                MediaProvider::default()
            }),
            Err(_) => MediaProvider::default(),
        };

        Self {
            provider,
            cloud_name: env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
            api_key: env::var("CLOUDINARY_API_KEY").unwrap_or_default(),
            api_secret: env::var("CLOUDINARY_API_SECRET").unwrap_or_default(),
            api_base: env::var("CLOUDINARY_API_BASE").unwrap_or_else(|_| default_api_base()),
            timeout_secs: env::var("MEDIA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        }
    }

    /// Whether all credentials needed by a remote provider are present
    pub fn has_credentials(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

fn default_api_base() -> String {
    String::from("https://api.cloudinary.com/v1_1")
}

fn default_timeout_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_provider_parsing() {
        assert_eq!("Cloudinary".parse::<MediaProvider>().unwrap(), MediaProvider::Cloudinary);
        assert_eq!("mock".parse::<MediaProvider>().unwrap(), MediaProvider::Memory);
        assert!("s3".parse::<MediaProvider>().is_err());
    }

    #[test]
    fn test_has_credentials() {
        let mut config = MediaConfig::default();
        assert!(!config.has_credentials());

        config.cloud_name = "demo".into();
        config.api_key = "key".into();
        config.api_secret = "secret".into();
        assert!(config.has_credentials());
    }
}
