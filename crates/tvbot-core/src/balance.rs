//! Account balance types from the trading backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-asset balance entry in the account breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub asset: String,
    pub free: Decimal,
    pub locked: Decimal,
    /// USD valuation of the whole position; zero when the backend has no
    /// price for the asset.
    #[serde(default)]
    pub usd_value: Decimal,
}

impl AssetBalance {
    /// Total holdings, free plus locked.
    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

/// Account balance snapshot from `/api/account/balance`.
///
/// Replaced wholesale on every successful poll: a response without a
/// per-asset breakdown clears any previously held one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccountBalance {
    pub total_usd: Decimal,
    #[serde(default)]
    pub balances: Vec<AssetBalance>,
}
