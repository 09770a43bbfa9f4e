//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tvbot_telemetry::DEFAULT_LOG_FILTER;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Trading backend base URL.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_backend_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log filter, same syntax as `RUST_LOG` (which overrides it).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
