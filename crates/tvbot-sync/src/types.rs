//! Snapshot types handed to the presentation layer.
//!
//! Rows carry pre-formatted strings so consumers render without touching
//! decimal or timestamp logic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tvbot_core::format;
use tvbot_core::{ActiveOrder, AssetBalance};

use crate::health::ConnectionState;

/// Full dashboard view collected under a single state lock.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub timestamp_ms: i64,
    pub connection: ConnectionSnapshot,
    pub stats: StatsSnapshot,
    pub balance: BalanceSnapshot,
    pub orders: Vec<OrderRow>,
    /// Why the most recent cycle failed; `None` after a clean cycle.
    pub last_error: Option<String>,
}

/// Connection health as displayed in the status card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionSnapshot {
    pub state: ConnectionState,
    pub last_update: Option<DateTime<Utc>>,
    /// Wall-clock display string, `Never` before the first success.
    pub last_update_display: String,
}

/// Headline stat cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub total_trades: usize,
    pub win_rate: u8,
    pub profit_loss: Decimal,
    pub profit_loss_display: String,
}

/// Account balance with the per-asset breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSnapshot {
    pub total_usd: Decimal,
    pub assets: Vec<AssetRow>,
}

/// Formatted per-asset balance row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRow {
    pub asset: String,
    pub free: String,
    pub locked: String,
    pub usd_value: String,
}

impl AssetRow {
    pub fn from_asset(asset: &AssetBalance) -> Self {
        Self {
            asset: asset.asset.clone(),
            free: format::format_quantity(asset.free),
            locked: format::format_quantity(asset.locked),
            usd_value: format::format_usd(asset.usd_value),
        }
    }
}

/// Formatted row for the active orders table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub symbol: String,
    /// `BUY` or `SELL`, matching the side badge.
    pub side: String,
    pub quantity: String,
    /// Limit price, or `Market` for market orders.
    pub entry_price: String,
    /// `--` when the backend cannot mark the order.
    pub current_price: String,
    /// Signed, `--` when unknown.
    pub pnl: String,
}

impl OrderRow {
    pub fn from_order(order: &ActiveOrder) -> Self {
        Self {
            symbol: order.symbol.clone(),
            side: order.side.to_string(),
            quantity: format::format_quantity(order.quantity),
            entry_price: format::format_price(order.price),
            current_price: format::format_current_price(order.current_price),
            pnl: format::format_pnl(order.pnl),
        }
    }
}
