//! Structured logging initialization.

use crate::error::{TelemetryError, TelemetryResult};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter applied when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_LOG_FILTER: &str = "info,tvbot=debug";

/// Initialize structured logging.
///
/// `RUST_LOG` wins over `default_filter` from the config. Output is JSON
/// when `RUST_ENV=production`, pretty otherwise.
pub fn init_logging(default_filter: &str) -> TelemetryResult<()> {
    let env_filter = resolve_filter(std::env::var("RUST_LOG").ok().as_deref(), default_filter)?;
    let active_filter = env_filter.to_string();

    let is_production = std::env::var("RUST_ENV")
        .map(|v| v == "production")
        .unwrap_or(false);

    if is_production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_names(true),
            )
            .init();
    }

    info!(filter = %active_filter, "Logging initialized");
    Ok(())
}

/// A `RUST_LOG` value that parses wins; otherwise the configured default
/// is used. Only an unparseable default is an error.
fn resolve_filter(rust_log: Option<&str>, default_filter: &str) -> TelemetryResult<EnvFilter> {
    if let Some(directives) = rust_log {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(default_filter)
        .map_err(|e| TelemetryError::LoggingInit(format!("Invalid log filter: {e}")))
}
