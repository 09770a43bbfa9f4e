//! Credential entry form state.

use serde::Serialize;
use tvbot_api::{CredentialRequest, SecretString};
use tvbot_core::Exchange;

/// An in-progress credential entry.
///
/// The secret never appears in serialized form state; the only way it leaves
/// this struct is inside a [`CredentialRequest`] bound for the backend.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialForm {
    pub exchange: Exchange,
    pub api_key: String,
    #[serde(skip)]
    pub api_secret: SecretString,
    pub name: String,
}

impl Default for CredentialForm {
    fn default() -> Self {
        Self {
            exchange: Exchange::Binance,
            api_key: String::new(),
            api_secret: SecretString::default(),
            name: "Main Account".to_string(),
        }
    }
}

impl CredentialForm {
    /// Build the payload shared by the validate and connect phases.
    pub fn to_request(&self) -> CredentialRequest {
        CredentialRequest {
            exchange: self.exchange.as_str().to_string(),
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
            name: self.name.clone(),
        }
    }

    /// True when both halves of the key pair have content.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    /// Reset to defaults. The old secret is dropped and zeroed.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
