//! Prometheus metrics for the dashboard engine.
//!
//! Covers the poll loop, backend connection health, the credential saga,
//! and settings saves.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`: a failure there means a duplicate
//! metric name, which should abort at static initialization rather than be
//! reported at runtime.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_gauge, register_histogram, register_int_gauge, CounterVec,
    Gauge, Histogram, IntGauge,
};

/// Backend connection state (1 = connected, 0 = disconnected).
pub static BACKEND_CONNECTED: Lazy<Gauge> = Lazy::new(|| {
    register_gauge!(
        "tvbot_backend_connected",
        "Backend connection state (1=connected)"
    )
    .unwrap()
});

/// Total poll cycles by outcome.
/// Labels: outcome (success/failure)
pub static POLL_CYCLES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "tvbot_poll_cycles_total",
        "Total dashboard poll cycles",
        &["outcome"]
    )
    .unwrap()
});

/// Poll cycle duration in milliseconds, both fetches plus reconciliation.
pub static POLL_CYCLE_DURATION_MS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "tvbot_poll_cycle_duration_ms",
        "Poll cycle duration in milliseconds",
        vec![5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0]
    )
    .unwrap()
});

/// Number of active orders in the current snapshot.
pub static ACTIVE_ORDERS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "tvbot_active_orders",
        "Active orders in the current snapshot"
    )
    .unwrap()
});

/// Credential saga phases by outcome.
/// Labels: phase (validate/connect/refresh), outcome (success/failure)
pub static CREDENTIAL_PHASE_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "tvbot_credential_phase_total",
        "Credential connection phases by outcome",
        &["phase", "outcome"]
    )
    .unwrap()
});

/// Settings saves by outcome.
/// Labels: outcome (success/failure)
pub static SETTINGS_SAVES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "tvbot_settings_saves_total",
        "Bot settings saves by outcome",
        &["outcome"]
    )
    .unwrap()
});

/// Metrics facade for easy access.
pub struct Metrics;

impl Metrics {
    /// Record backend reachable.
    pub fn backend_connected() {
        BACKEND_CONNECTED.set(1.0);
    }

    /// Record backend unreachable.
    pub fn backend_disconnected() {
        BACKEND_CONNECTED.set(0.0);
    }

    /// Record a completed poll cycle.
    pub fn poll_cycle(outcome: &str, duration_ms: f64) {
        POLL_CYCLES_TOTAL.with_label_values(&[outcome]).inc();
        POLL_CYCLE_DURATION_MS.observe(duration_ms);
    }

    /// Update the active order count from the latest snapshot.
    pub fn active_orders_set(count: i64) {
        ACTIVE_ORDERS.set(count);
    }

    /// Record a credential saga phase outcome.
    pub fn credential_phase(phase: &str, outcome: &str) {
        CREDENTIAL_PHASE_TOTAL
            .with_label_values(&[phase, outcome])
            .inc();
    }

    /// Record a settings save outcome.
    pub fn settings_save(outcome: &str) {
        SETTINGS_SAVES_TOTAL.with_label_values(&[outcome]).inc();
    }
}
