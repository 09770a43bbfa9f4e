//! Core domain types for the TradingView bot dashboard.
//!
//! This crate provides the types shared across the dashboard engine:
//! - `AccountBalance`, `ActiveOrder`: wire shapes polled from the backend
//! - `Credential`, `BotSettings`: exchange connection and webhook settings
//! - `DerivedStats`: headline numbers recomputed from each snapshot
//! - `format`: pure display derivations for the presentation boundary

pub mod balance;
pub mod credential;
pub mod format;
pub mod order;
pub mod settings;
pub mod stats;

pub use balance::{AccountBalance, AssetBalance};
pub use credential::{Credential, CredentialStatus, Exchange};
pub use order::{ActiveOrder, OrderSide};
pub use settings::{BotSettings, CurrencyType};
pub use stats::DerivedStats;
