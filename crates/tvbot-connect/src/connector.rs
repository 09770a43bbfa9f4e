//! Two-phase credential connection saga.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};
use tvbot_api::{ApiError, SecretString, TradingApi};
use tvbot_core::format::mask_api_key;
use tvbot_core::{Credential, Exchange};
use tvbot_telemetry::Metrics;

use crate::error::{ConnectError, ConnectResult};
use crate::form::CredentialForm;

/// Shown when the backend rejects credentials without saying why.
const INVALID_CREDENTIALS: &str = "Invalid API credentials";

/// Drives credential entry, validation, and storage against the backend.
///
/// The connect saga is strictly ordered: the store endpoint is reachable only
/// through a successful validate in the same call. A validation rejection
/// ends the attempt and the payload is dropped, secret included.
pub struct ExchangeConnector {
    api: Arc<dyn TradingApi>,
    form: RwLock<CredentialForm>,
    connected: RwLock<Vec<Credential>>,
    /// Masked display keys for credentials connected this session, keyed by
    /// (exchange, name). The backend list never carries key material.
    masked_keys: RwLock<HashMap<(String, String), String>>,
}

impl ExchangeConnector {
    pub fn new(api: Arc<dyn TradingApi>) -> Self {
        Self {
            api,
            form: RwLock::new(CredentialForm::default()),
            connected: RwLock::new(Vec::new()),
            masked_keys: RwLock::new(HashMap::new()),
        }
    }

    // ---- Form operations ----

    pub fn set_exchange(&self, exchange: Exchange) {
        self.form.write().exchange = exchange;
    }

    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.form.write().api_key = api_key.into();
    }

    pub fn set_api_secret(&self, api_secret: impl Into<String>) {
        self.form.write().api_secret = SecretString::new(api_secret);
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.form.write().name = name.into();
    }

    /// Current form contents.
    pub fn form(&self) -> CredentialForm {
        self.form.read().clone()
    }

    /// Connected credentials as of the last refresh, masked keys attached
    /// where this session knows them.
    pub fn connected(&self) -> Vec<Credential> {
        self.connected.read().clone()
    }

    // ---- Saga ----

    /// Run the validate-then-connect saga for the current form contents.
    ///
    /// On success the connected list is refreshed and the form resets. A
    /// refresh failure is logged but does not fail the saga; the credentials
    /// are already stored at that point.
    pub async fn connect(&self) -> ConnectResult<()> {
        let request = self.form.read().to_request();

        let validation = self
            .api
            .validate_credentials(&request)
            .await
            .map_err(|e| transport_failure("validate", e))?;

        if !validation.is_success() {
            Metrics::credential_phase("validate", "failure");
            warn!(exchange = %request.exchange, "Credential validation rejected");
            return Err(ConnectError::Validation(
                validation.message_or(INVALID_CREDENTIALS),
            ));
        }
        Metrics::credential_phase("validate", "success");

        let stored = self
            .api
            .connect_credentials(&request)
            .await
            .map_err(|e| transport_failure("connect", e))?;

        if !stored.is_success() {
            Metrics::credential_phase("connect", "failure");
            warn!(exchange = %request.exchange, "Credential storage rejected");
            return Err(ConnectError::Persistence(
                stored.message_or("Failed to store credentials"),
            ));
        }
        Metrics::credential_phase("connect", "success");

        info!(
            exchange = %request.exchange,
            name = %request.name,
            "Exchange credentials connected"
        );

        self.masked_keys.write().insert(
            (request.exchange.clone(), request.name.clone()),
            mask_api_key(&request.api_key),
        );

        if let Err(e) = self.refresh_connected().await {
            warn!(error = %e, "Connected list refresh failed after connect");
        }

        self.form.write().clear();
        Ok(())
    }

    /// Reload the connected credential list from the backend.
    ///
    /// On error the cached list stays as it was.
    pub async fn refresh_connected(&self) -> ConnectResult<()> {
        let list = self.api.list_credentials().await.map_err(|e| {
            Metrics::credential_phase("refresh", "failure");
            ConnectError::Transport(e.to_string())
        })?;
        Metrics::credential_phase("refresh", "success");

        let masked = self.masked_keys.read();
        let list: Vec<Credential> = list
            .into_iter()
            .map(|mut credential| {
                let key = (credential.exchange.clone(), credential.name.clone());
                if let Some(mask) = masked.get(&key) {
                    credential.api_key_masked = Some(mask.clone());
                }
                credential
            })
            .collect();
        drop(masked);

        info!(count = list.len(), "Refreshed connected credential list");
        *self.connected.write() = list;
        Ok(())
    }
}

fn transport_failure(phase: &str, error: ApiError) -> ConnectError {
    Metrics::credential_phase(phase, "failure");
    ConnectError::Transport(error.to_string())
}
