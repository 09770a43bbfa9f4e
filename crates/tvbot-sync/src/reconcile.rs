//! Poll-cycle reconciliation.
//!
//! One cycle fetches balance and active orders concurrently and applies them
//! as a unit: both results land together or the previous snapshot stays
//! exactly as it was.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};
use tvbot_api::{ApiResult, TradingApi};
use tvbot_core::{AccountBalance, ActiveOrder};
use tvbot_telemetry::Metrics;

use crate::health::HealthTracker;
use crate::state::DashboardState;

/// Outcome of one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Both fetches succeeded; the snapshot was replaced.
    Applied,
    /// At least one fetch failed; the snapshot was retained.
    Failed,
}

impl CycleOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    fn as_label(&self) -> &'static str {
        match self {
            Self::Applied => "success",
            Self::Failed => "failure",
        }
    }
}

/// Applies poll results to the dashboard state and reports each outcome to
/// the health tracker.
pub struct Reconciler {
    api: Arc<dyn TradingApi>,
    state: DashboardState,
    health: Arc<HealthTracker>,
}

impl Reconciler {
    pub fn new(
        api: Arc<dyn TradingApi>,
        state: DashboardState,
        health: Arc<HealthTracker>,
    ) -> Self {
        Self { api, state, health }
    }

    /// Run one poll cycle end to end.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let started = Instant::now();
        let (balance, orders) = tokio::join!(
            self.api.fetch_balance(),
            self.api.fetch_active_orders()
        );
        let outcome = self.reconcile(balance, orders);
        Metrics::poll_cycle(outcome.as_label(), started.elapsed().as_millis() as f64);
        outcome
    }

    /// Apply a pair of fetch results: both or neither.
    ///
    /// When both fetches fail, the balance error is the one surfaced.
    pub fn reconcile(
        &self,
        balance: ApiResult<AccountBalance>,
        orders: ApiResult<Vec<ActiveOrder>>,
    ) -> CycleOutcome {
        match (balance, orders) {
            (Ok(balance), Ok(orders)) => {
                self.state.apply_update(balance, orders);
                self.health.record_success();
                debug!("Poll cycle applied");
                CycleOutcome::Applied
            }
            (Err(error), _) | (Ok(_), Err(error)) => {
                let error = error.to_string();
                warn!(error = %error, "Poll cycle failed; keeping previous snapshot");
                self.state.mark_failure(error);
                self.health.record_failure();
                CycleOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::ConnectionState;
    use crate::test_api::StubApi;
    use rust_decimal_macros::dec;
    use tvbot_api::ApiError;
    use tvbot_core::OrderSide;

    fn reconciler_with_stub() -> (Arc<StubApi>, Reconciler, DashboardState, Arc<HealthTracker>) {
        let api = Arc::new(StubApi::new());
        let health = Arc::new(HealthTracker::new());
        let state = DashboardState::new(health.clone());
        let reconciler = Reconciler::new(api.clone(), state.clone(), health.clone());
        (api, reconciler, state, health)
    }

    fn balance(total: rust_decimal::Decimal) -> AccountBalance {
        AccountBalance {
            total_usd: total,
            balances: vec![],
        }
    }

    fn order(pnl: rust_decimal::Decimal) -> ActiveOrder {
        ActiveOrder {
            symbol: "BTCUSDT".to_string(),
            side: OrderSide::Buy,
            order_type: None,
            quantity: dec!(1),
            price: None,
            current_price: None,
            pnl: Some(pnl),
            created_at: None,
        }
    }

    #[test]
    fn test_both_ok_applies() {
        let (_api, reconciler, state, health) = reconciler_with_stub();

        let outcome = reconciler.reconcile(
            Ok(balance(dec!(800))),
            Ok(vec![order(dec!(150)), order(dec!(-50)), order(dec!(280))]),
        );

        assert!(outcome.is_applied());
        assert_eq!(state.stats().total_trades, 3);
        assert_eq!(state.stats().win_rate, 67);
        assert_eq!(state.stats().profit_loss, dec!(800));
        assert_eq!(health.state(), ConnectionState::Connected);
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_balance_failure_retains_snapshot() {
        let (_api, reconciler, state, health) = reconciler_with_stub();
        reconciler.reconcile(Ok(balance(dec!(800))), Ok(vec![order(dec!(10))]));

        let outcome = reconciler.reconcile(
            Err(ApiError::Transport("GET /api/account/balance failed: refused".to_string())),
            Ok(vec![]),
        );

        assert_eq!(outcome, CycleOutcome::Failed);
        // Previous data stays bit for bit.
        assert_eq!(state.balance().total_usd, dec!(800));
        assert_eq!(state.orders().len(), 1);
        assert_eq!(state.stats().total_trades, 1);
        assert_eq!(health.state(), ConnectionState::Disconnected);
        assert!(state
            .last_error()
            .unwrap()
            .contains("/api/account/balance"));
    }

    #[test]
    fn test_orders_failure_retains_snapshot() {
        let (_api, reconciler, state, _health) = reconciler_with_stub();
        reconciler.reconcile(Ok(balance(dec!(500))), Ok(vec![order(dec!(1))]));

        reconciler.reconcile(
            Ok(balance(dec!(999))),
            Err(ApiError::Http {
                status: 502,
                body: "bad gateway".to_string(),
            }),
        );

        // The fresher balance is not applied on its own.
        assert_eq!(state.balance().total_usd, dec!(500));
        assert!(state.last_error().unwrap().contains("502"));
    }

    #[test]
    fn test_balance_error_takes_precedence() {
        let (_api, reconciler, state, _health) = reconciler_with_stub();

        reconciler.reconcile(
            Err(ApiError::Transport("balance down".to_string())),
            Err(ApiError::Transport("orders down".to_string())),
        );

        assert!(state.last_error().unwrap().contains("balance down"));
    }

    #[test]
    fn test_recovery_clears_error_and_reconnects() {
        let (_api, reconciler, state, health) = reconciler_with_stub();
        reconciler.reconcile(
            Err(ApiError::Transport("down".to_string())),
            Ok(vec![]),
        );
        assert!(!health.is_connected());

        reconciler.reconcile(Ok(balance(dec!(100))), Ok(vec![]));
        assert!(health.is_connected());
        assert!(state.last_error().is_none());
        assert_eq!(state.stats().profit_loss, dec!(100));
    }

    #[tokio::test]
    async fn test_run_cycle_fetches_and_applies() {
        let (api, reconciler, state, health) = reconciler_with_stub();
        api.push_cycle(Ok(balance(dec!(42))), Ok(vec![order(dec!(1))]));

        let outcome = reconciler.run_cycle().await;

        assert!(outcome.is_applied());
        assert_eq!(api.balance_calls(), 1);
        assert_eq!(api.order_calls(), 1);
        assert_eq!(state.stats().profit_loss, dec!(42));
        assert!(health.is_connected());
    }
}
