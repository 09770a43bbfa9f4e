//! TradingView bot dashboard - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// TradingView bot dashboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via TVBOT_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config path: CLI arg > TVBOT_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("TVBOT_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    // Config is read before logging init so the filter can come from it;
    // RUST_LOG still wins when set.
    let config = tvbot_dash::AppConfig::load(&config_path)?;

    tvbot_telemetry::init_logging(&config.telemetry.log_level)?;

    info!("Starting tvbot dashboard v{}", env!("CARGO_PKG_VERSION"));
    info!(
        config_path = %config_path,
        backend_url = %config.backend_url,
        "Configuration loaded"
    );

    let app = tvbot_dash::Application::new(config)?;
    app.run().await?;

    Ok(())
}
