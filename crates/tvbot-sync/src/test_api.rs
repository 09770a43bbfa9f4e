//! Scriptable `TradingApi` double for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tvbot_api::{ApiError, ApiResult, CredentialRequest, StatusResponse, TradingApi};
use tvbot_core::{AccountBalance, ActiveOrder, BotSettings, Credential};

/// In-process backend double.
///
/// Scripted responses are consumed front to back; once a queue runs dry the
/// corresponding fetch succeeds with empty data so poll loops can keep
/// spinning. An optional delay simulates a slow backend.
#[derive(Default)]
pub(crate) struct StubApi {
    balances: Mutex<VecDeque<ApiResult<AccountBalance>>>,
    orders: Mutex<VecDeque<ApiResult<Vec<ActiveOrder>>>>,
    delay: Mutex<Option<Duration>>,
    balance_calls: AtomicUsize,
    order_calls: AtomicUsize,
    active_cycles: AtomicUsize,
    max_active_cycles: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script one poll cycle's worth of responses.
    pub fn push_cycle(
        &self,
        balance: ApiResult<AccountBalance>,
        orders: ApiResult<Vec<ActiveOrder>>,
    ) {
        self.balances.lock().push_back(balance);
        self.orders.lock().push_back(orders);
    }

    /// Make every balance fetch take this long.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }

    pub fn order_calls(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }

    /// Highest number of cycles ever observed in flight at once.
    pub fn max_active_cycles(&self) -> usize {
        self.max_active_cycles.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TradingApi for StubApi {
    async fn fetch_balance(&self) -> ApiResult<AccountBalance> {
        let active = self.active_cycles.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active_cycles.fetch_max(active, Ordering::SeqCst);
        self.balance_calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.active_cycles.fetch_sub(1, Ordering::SeqCst);
        self.balances
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(AccountBalance::default()))
    }

    async fn fetch_active_orders(&self) -> ApiResult<Vec<ActiveOrder>> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        self.orders
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn validate_credentials(
        &self,
        _request: &CredentialRequest,
    ) -> ApiResult<StatusResponse> {
        Err(ApiError::Transport("not scripted".to_string()))
    }

    async fn connect_credentials(
        &self,
        _request: &CredentialRequest,
    ) -> ApiResult<StatusResponse> {
        Err(ApiError::Transport("not scripted".to_string()))
    }

    async fn list_credentials(&self) -> ApiResult<Vec<Credential>> {
        Err(ApiError::Transport("not scripted".to_string()))
    }

    async fn fetch_settings(&self) -> ApiResult<BotSettings> {
        Err(ApiError::Transport("not scripted".to_string()))
    }

    async fn save_settings(&self, _settings: &BotSettings) -> ApiResult<BotSettings> {
        Err(ApiError::Transport("not scripted".to_string()))
    }
}
