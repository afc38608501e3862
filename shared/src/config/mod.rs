//! Configuration module
//!
//! - `environment` - Environment detection
//! - `media` - Hosted image service credentials
//! - `server` - HTTP server and CORS configuration

pub mod environment;
pub mod media;
pub mod server;

use serde::{Deserialize, Serialize};

pub use environment::Environment;
pub use media::{MediaConfig, MediaProvider};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            media: MediaConfig::from_env(),
        }
    }

    /// Whether error responses may carry failure traces
    pub fn expose_error_traces(&self) -> bool {
        !self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traces_hidden_only_in_production() {
        let mut config = AppConfig::default();
        assert!(config.expose_error_traces());

        config.environment = Environment::Staging;
        assert!(config.expose_error_traces());

        config.environment = Environment::Production;
        assert!(!config.expose_error_traces());
    }
}
