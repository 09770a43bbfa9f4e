//! Backend connection health tracking.
//!
//! Health is derived purely from reconciliation outcomes: one successful
//! cycle flips to `Connected`, one failed cycle to `Disconnected`. There is
//! no debouncing, and the tracker never schedules retries; cadence belongs
//! to the poller alone.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{info, warn};
use tvbot_telemetry::Metrics;

/// Connection state as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected => write!(f, "CONNECTED"),
            Self::Disconnected => write!(f, "DISCONNECTED"),
        }
    }
}

/// Tracks backend reachability across poll cycles.
///
/// Starts `Disconnected` with no update timestamp; the timestamp only ever
/// moves forward on success, so it always points at the last good refresh
/// even while disconnected.
pub struct HealthTracker {
    state: RwLock<ConnectionState>,
    last_update: RwLock<Option<DateTime<Utc>>>,
}

impl HealthTracker {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ConnectionState::Disconnected),
            last_update: RwLock::new(None),
        }
    }

    /// Record a successful reconciliation and stamp the update time.
    pub fn record_success(&self) {
        let was = *self.state.read();
        *self.state.write() = ConnectionState::Connected;
        *self.last_update.write() = Some(Utc::now());
        Metrics::backend_connected();

        if !was.is_connected() {
            info!("Backend connection established");
        }
    }

    /// Record a failed cycle. The last successful update time is kept.
    pub fn record_failure(&self) {
        let was = *self.state.read();
        *self.state.write() = ConnectionState::Disconnected;
        Metrics::backend_disconnected();

        if was.is_connected() {
            warn!("Backend connection lost");
        }
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.read()
    }

    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    /// Time of the last successful refresh; `None` before the first one.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        *self.last_update.read()
    }
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}
