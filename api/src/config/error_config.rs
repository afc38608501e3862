use sf_shared::{AppConfig, Environment};

/// Error response configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorConfig {
    /// Include failure traces in error responses
    pub include_trace: bool,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl ErrorConfig {
    /// Create production configuration
    pub fn production() -> Self {
        Self {
            include_trace: false,
        }
    }

    /// Create development configuration
    pub fn development() -> Self {
        Self {
            include_trace: true,
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            include_trace: config.expose_error_traces(),
        }
    }
}
