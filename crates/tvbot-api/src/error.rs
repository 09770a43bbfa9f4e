//! API error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Connection, DNS, or timeout failure before a response arrived.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
