//! Auth service configuration.

use std::env;

use common::ServiceConfig;
use domain::{DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_NAME};

/// Auth service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthServiceConfig {
    pub service: ServiceConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service: ServiceConfig {
                service_name: lookup("AUTH_SERVICE_NAME")
                    .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
                log_level: lookup("AUTH_SERVICE_LOG_LEVEL")
                    .or_else(|| lookup("RUST_LOG"))
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
        }
    }
}
