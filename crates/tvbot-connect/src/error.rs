//! Error types for the credential connection saga.

use thiserror::Error;

/// Errors from the validate/connect saga.
///
/// The variant tells the caller which phase failed; the payload carries the
/// message to show, already resolved against fallbacks.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The backend rejected the credentials in the validate phase.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Validation passed but the backend could not store the credentials.
    #[error("Connect failed: {0}")]
    Persistence(String),

    /// Transport-level failure in either phase.
    #[error("Connection error: {0}")]
    Transport(String),
}

impl ConnectError {
    /// The user-facing message without the phase prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::Persistence(message) | Self::Transport(message) => {
                message
            }
        }
    }
}

pub type ConnectResult<T> = Result<T, ConnectError>;
