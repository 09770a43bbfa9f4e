//! Connected exchange credentials as listed by the backend.

use serde::{Deserialize, Serialize};

/// Exchanges the connection form and bot wizard can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exchange {
    Binance,
    BinanceFutures,
}

impl Exchange {
    /// Wire identifier, as sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binance => "binance",
            Self::BinanceFutures => "binance_futures",
        }
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self::Binance
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binance => write!(f, "Binance"),
            Self::BinanceFutures => write!(f, "Binance Futures"),
        }
    }
}

/// Credential status reported by the backend.
///
/// Only `"active"` means the key works; any other wire value (including ones
/// added server-side later) decodes to `UpdateRequired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    Active,
    #[serde(other)]
    UpdateRequired,
}

impl CredentialStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for CredentialStatus {
    fn default() -> Self {
        Self::UpdateRequired
    }
}

impl std::fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::UpdateRequired => write!(f, "Update Required"),
        }
    }
}

/// One connected credential from `/api/exchange/list`.
///
/// Never carries secret material. `api_key_masked` is populated locally for
/// display and is not part of the wire shape; `exchange` stays a free string
/// so unknown backend entries still list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub exchange: String,
    pub name: String,
    #[serde(default)]
    pub status: CredentialStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_masked: Option<String>,
}
