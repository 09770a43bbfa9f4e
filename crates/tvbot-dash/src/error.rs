//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(#[from] tvbot_api::ApiError),

    #[error("Connect error: {0}")]
    Connect(#[from] tvbot_connect::ConnectError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] tvbot_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
