//! Live-state synchronization and reconciliation for the dashboard.
//!
//! A fixed-interval `Poller` drives the `Reconciler`, which fetches balance
//! and active orders together and applies them to `DashboardState` as one
//! unit; the `HealthTracker` mirrors each cycle outcome as a connection
//! state. `SyncEngine` wires the pieces and owns their lifecycle.

pub mod engine;
pub mod health;
pub mod poller;
pub mod reconcile;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod test_api;

pub use engine::SyncEngine;
pub use health::{ConnectionState, HealthTracker};
pub use poller::{Poller, POLL_INTERVAL};
pub use reconcile::{CycleOutcome, Reconciler};
pub use state::DashboardState;
pub use types::{
    AssetRow, BalanceSnapshot, ConnectionSnapshot, DashboardSnapshot, OrderRow, StatsSnapshot,
};
