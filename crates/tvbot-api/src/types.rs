//! Request and response shapes for the backend API.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// API secret held in memory only as long as needed.
///
/// Zeroed on drop, redacted in debug output, and serialized only when an
/// outbound request body is built.
#[derive(Clone, Default)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the raw secret. Callers must not log or persist it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[redacted]")
    }
}

impl Serialize for SecretString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Body for `/api/exchange/validate` and `/api/exchange/connect`.
///
/// The same payload goes to both phases; it is dropped as soon as the saga
/// finishes, taking the secret with it.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialRequest {
    pub exchange: String,
    pub api_key: String,
    pub api_secret: SecretString,
    pub name: String,
}

/// Outcome kind reported by the credential endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Response from `/api/exchange/validate` and `/api/exchange/connect`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: StatusKind,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == StatusKind::Success
    }

    /// Backend-provided message, or `fallback` when absent or empty.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}
