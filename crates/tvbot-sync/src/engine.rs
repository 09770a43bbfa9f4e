//! Sync engine wiring.

use std::sync::Arc;
use std::time::Duration;

use tvbot_api::TradingApi;

use crate::health::HealthTracker;
use crate::poller::{Poller, POLL_INTERVAL};
use crate::reconcile::Reconciler;
use crate::state::DashboardState;
use crate::types::DashboardSnapshot;

/// A running synchronization engine: state, health, and the poll loop that
/// feeds them.
pub struct SyncEngine {
    state: DashboardState,
    health: Arc<HealthTracker>,
    poller: Poller,
}

impl SyncEngine {
    /// Spawn the poll loop against `api` at the standard cadence.
    pub fn spawn(api: Arc<dyn TradingApi>) -> Self {
        Self::spawn_with_interval(api, POLL_INTERVAL)
    }

    /// Spawn with a custom interval (tests shorten it).
    pub fn spawn_with_interval(api: Arc<dyn TradingApi>, interval: Duration) -> Self {
        let health = Arc::new(HealthTracker::new());
        let state = DashboardState::new(health.clone());
        let reconciler = Reconciler::new(api, state.clone(), health.clone());
        let poller = Poller::with_interval(reconciler, interval);

        Self {
            state,
            health,
            poller,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn health(&self) -> &HealthTracker {
        &self.health
    }

    /// Current view for the presentation layer.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.collect_snapshot()
    }

    /// Stop polling. No state mutation happens after this returns.
    pub async fn stop(self) {
        self.poller.stop().await;
    }
}
