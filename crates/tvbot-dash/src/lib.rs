//! TradingView bot dashboard application.
//!
//! Wires the live-state components against a single backend client:
//! - Balance/order polling and reconciliation (`tvbot-sync`)
//! - Exchange credential connection (`tvbot-connect`)
//! - Webhook settings editing (this crate)

pub mod app;
pub mod config;
pub mod error;
pub mod settings;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use settings::SettingsEditor;
