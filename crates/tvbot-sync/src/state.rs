//! Dashboard state management.
//!
//! `DashboardState` holds the reconciled view the presentation layer reads:
//! balance, open orders, derived stats, and the current error. Everything a
//! cycle produces swaps under one write lock, so readers never observe a
//! half-applied update.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tvbot_core::format;
use tvbot_core::{AccountBalance, ActiveOrder, DerivedStats};
use tvbot_telemetry::Metrics;

use crate::health::HealthTracker;
use crate::types::{
    AssetRow, BalanceSnapshot, ConnectionSnapshot, DashboardSnapshot, OrderRow, StatsSnapshot,
};

struct StateInner {
    balance: AccountBalance,
    orders: Vec<ActiveOrder>,
    stats: DerivedStats,
    last_error: Option<String>,
}

/// Reconciled dashboard state plus the health tracker it is displayed with.
#[derive(Clone)]
pub struct DashboardState {
    inner: Arc<RwLock<StateInner>>,
    health: Arc<HealthTracker>,
}

impl DashboardState {
    pub fn new(health: Arc<HealthTracker>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StateInner {
                balance: AccountBalance::default(),
                orders: Vec::new(),
                stats: DerivedStats::default(),
                last_error: None,
            })),
            health,
        }
    }

    /// Replace balance and the order set together and recompute stats.
    ///
    /// The previous order set is discarded, not merged, and any surfaced
    /// error is cleared.
    pub fn apply_update(&self, balance: AccountBalance, orders: Vec<ActiveOrder>) {
        let stats = DerivedStats::compute(&balance, &orders);
        {
            let mut inner = self.inner.write();
            inner.balance = balance;
            inner.orders = orders;
            inner.stats = stats;
            inner.last_error = None;
        }
        Metrics::active_orders_set(stats.total_trades as i64);
    }

    /// Keep the current data untouched and surface why the cycle failed.
    pub fn mark_failure(&self, error: String) {
        self.inner.write().last_error = Some(error);
    }

    pub fn stats(&self) -> DerivedStats {
        self.inner.read().stats
    }

    pub fn balance(&self) -> AccountBalance {
        self.inner.read().balance.clone()
    }

    pub fn orders(&self) -> Vec<ActiveOrder> {
        self.inner.read().orders.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.inner.read().last_error.clone()
    }

    pub fn health(&self) -> &HealthTracker {
        &self.health
    }

    /// Collect a full snapshot of the current state.
    pub fn collect_snapshot(&self) -> DashboardSnapshot {
        let inner = self.inner.read();
        let last_update = self.health.last_update();

        DashboardSnapshot {
            timestamp_ms: Utc::now().timestamp_millis(),
            connection: ConnectionSnapshot {
                state: self.health.state(),
                last_update,
                last_update_display: format::format_last_update(last_update),
            },
            stats: StatsSnapshot {
                total_trades: inner.stats.total_trades,
                win_rate: inner.stats.win_rate,
                profit_loss: inner.stats.profit_loss,
                profit_loss_display: format::format_usd(inner.stats.profit_loss),
            },
            balance: BalanceSnapshot {
                total_usd: inner.balance.total_usd,
                assets: inner
                    .balance
                    .balances
                    .iter()
                    .map(AssetRow::from_asset)
                    .collect(),
            },
            orders: inner.orders.iter().map(OrderRow::from_order).collect(),
            last_error: inner.last_error.clone(),
        }
    }
}
