//! Shared configuration structures.

use serde::{Deserialize, Serialize};

use domain::{DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_NAME};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
}

impl ServiceConfig {
    /// Filter directive to install, honouring the verbose override.
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            "debug".to_string()
        } else {
            self.log_level.clone()
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_name, "auth-service");
        assert_eq!(config.log_filter(false), "info");
    }

    #[test]
    fn test_verbose_forces_debug() {
        let config = ServiceConfig {
            service_name: "svc".into(),
            log_level: "warn".into(),
        };
        assert_eq!(config.log_filter(true), "debug");
        assert_eq!(config.log_filter(false), "warn");
    }
}
