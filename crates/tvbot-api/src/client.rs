//! HTTP client for the trading backend REST API.
//!
//! All dashboard traffic goes through `BackendClient`: balance and order
//! polling, the credential validate/connect pair, and webhook settings.

use crate::error::{ApiError, ApiResult};
use crate::types::{CredentialRequest, StatusResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};
use tvbot_core::{AccountBalance, ActiveOrder, BotSettings, Credential};

/// Default timeout for backend requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend operations the dashboard engine depends on.
///
/// `BackendClient` is the production implementation; tests substitute
/// in-process doubles.
#[async_trait]
pub trait TradingApi: Send + Sync {
    /// GET `/api/account/balance`.
    async fn fetch_balance(&self) -> ApiResult<AccountBalance>;

    /// GET `/api/trading/active-orders`.
    async fn fetch_active_orders(&self) -> ApiResult<Vec<ActiveOrder>>;

    /// POST `/api/exchange/validate`. Checks credentials without storing.
    async fn validate_credentials(&self, request: &CredentialRequest)
        -> ApiResult<StatusResponse>;

    /// POST `/api/exchange/connect`. Persists previously validated
    /// credentials.
    async fn connect_credentials(&self, request: &CredentialRequest)
        -> ApiResult<StatusResponse>;

    /// GET `/api/exchange/list`.
    async fn list_credentials(&self) -> ApiResult<Vec<Credential>>;

    /// GET `/api/settings`.
    async fn fetch_settings(&self) -> ApiResult<BotSettings>;

    /// POST `/api/settings`. Returns the settings as stored.
    async fn save_settings(&self, settings: &BotSettings) -> ApiResult<BotSettings>;
}

/// Typed client for the dashboard's trading backend.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the given base URL (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Client(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("GET {path} failed: {e}")))?;

        Self::read_json(path, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("POST {path} failed: {e}")))?;

        Self::read_json(path, response).await
    }

    async fn read_json<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse {path} response: {e}")))
    }
}

#[async_trait]
impl TradingApi for BackendClient {
    async fn fetch_balance(&self) -> ApiResult<AccountBalance> {
        debug!("Fetching account balance");
        self.get_json("/api/account/balance").await
    }

    async fn fetch_active_orders(&self) -> ApiResult<Vec<ActiveOrder>> {
        debug!("Fetching active orders");
        self.get_json("/api/trading/active-orders").await
    }

    async fn validate_credentials(
        &self,
        request: &CredentialRequest,
    ) -> ApiResult<StatusResponse> {
        info!(exchange = %request.exchange, name = %request.name, "Validating exchange credentials");
        self.post_json("/api/exchange/validate", request).await
    }

    async fn connect_credentials(
        &self,
        request: &CredentialRequest,
    ) -> ApiResult<StatusResponse> {
        info!(exchange = %request.exchange, name = %request.name, "Connecting exchange credentials");
        self.post_json("/api/exchange/connect", request).await
    }

    async fn list_credentials(&self) -> ApiResult<Vec<Credential>> {
        debug!("Fetching connected credential list");
        self.get_json("/api/exchange/list").await
    }

    async fn fetch_settings(&self) -> ApiResult<BotSettings> {
        debug!("Fetching bot settings");
        self.get_json("/api/settings").await
    }

    async fn save_settings(&self, settings: &BotSettings) -> ApiResult<BotSettings> {
        info!("Saving bot settings");
        self.post_json("/api/settings", settings).await
    }
}
