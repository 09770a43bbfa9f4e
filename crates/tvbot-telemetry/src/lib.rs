//! Prometheus metrics and structured logging for the dashboard engine.
//!
//! - Poll cycle counters and duration histogram
//! - Backend connection gauge mirroring the health tracker
//! - Credential saga and settings-save counters
//! - Structured JSON logging with tracing

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
pub use metrics::Metrics;
