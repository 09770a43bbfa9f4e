//! Active order types as reported by the trading backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side, wire-encoded in the exchange convention (`"BUY"` / `"SELL"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Check if this is the buy side.
    pub fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// A single open order from `/api/trading/active-orders`.
///
/// `price` is absent for market orders. `current_price` and `pnl` are only
/// present when the backend can mark the position; the display layer renders
/// placeholders for missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrder {
    pub symbol: String,
    pub side: OrderSide,
    /// Exchange order type (e.g. `LIMIT`), passed through for display.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    pub quantity: Decimal,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(rename = "currentPrice", default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub pnl: Option<Decimal>,
    /// Backend creation timestamp in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl ActiveOrder {
    /// An order counts as winning when its reported P&L is strictly positive.
    ///
    /// Unknown P&L is not a win.
    pub fn is_winning(&self) -> bool {
        matches!(self.pnl, Some(pnl) if pnl > Decimal::ZERO)
    }

    /// Check if this is a market order (no limit price).
    pub fn is_market(&self) -> bool {
        self.price.is_none()
    }
}
