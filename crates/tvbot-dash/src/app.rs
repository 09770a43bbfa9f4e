//! Main application orchestration.
//!
//! Builds the backend client and hands it to the components:
//! - `SyncEngine` polls and reconciles dashboard state
//! - `ExchangeConnector` caches connected credentials
//! - `SettingsEditor` holds the webhook settings working copy

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tvbot_api::{BackendClient, TradingApi};
use tvbot_connect::ExchangeConnector;
use tvbot_sync::SyncEngine;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::settings::SettingsEditor;

/// Periodic status log interval.
const STATUS_LOG_INTERVAL: Duration = Duration::from_secs(60);

/// Main application.
pub struct Application {
    config: AppConfig,
    api: Arc<dyn TradingApi>,
    connector: Arc<ExchangeConnector>,
    settings: Arc<SettingsEditor>,
}

impl Application {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let api: Arc<dyn TradingApi> = Arc::new(BackendClient::new(&config.backend_url)?);
        let connector = Arc::new(ExchangeConnector::new(api.clone()));
        let settings = Arc::new(SettingsEditor::new(api.clone()));

        Ok(Self {
            config,
            api,
            connector,
            settings,
        })
    }

    pub fn connector(&self) -> &Arc<ExchangeConnector> {
        &self.connector
    }

    pub fn settings(&self) -> &Arc<SettingsEditor> {
        &self.settings
    }

    /// Run until a shutdown signal arrives.
    pub async fn run(self) -> AppResult<()> {
        info!(backend_url = %self.config.backend_url, "Starting dashboard");

        // Initial loads. The dashboard still starts when the backend is down;
        // the poll loop flips it to connected once the backend answers.
        if let Err(e) = self.connector.refresh_connected().await {
            warn!(error = %e, "Initial credential list load failed");
        }
        if let Err(e) = self.settings.load().await {
            warn!(error = %e, "Initial settings load failed");
        }

        let engine = SyncEngine::spawn(self.api.clone());

        let mut status_interval = tokio::time::interval(STATUS_LOG_INTERVAL);

        loop {
            tokio::select! {
                _ = status_interval.tick() => {
                    let snapshot = engine.snapshot();
                    info!(
                        connection = %snapshot.connection.state,
                        total_trades = snapshot.stats.total_trades,
                        win_rate = snapshot.stats.win_rate,
                        "Dashboard status"
                    );
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        info!("Shutting down");
        engine.stop().await;

        Ok(())
    }
}
