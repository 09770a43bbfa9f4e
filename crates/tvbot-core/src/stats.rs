//! Aggregate statistics derived from the reconciled dashboard state.

use crate::{AccountBalance, ActiveOrder};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Headline stats recomputed on every successful poll cycle.
///
/// Pure function of the current balance and order set; never cached across
/// cycles, so `total_trades` always matches the held order set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DerivedStats {
    pub total_trades: usize,
    /// Percentage of orders with strictly positive P&L, 0-100.
    pub win_rate: u8,
    /// Account-level number: total USD balance, not a per-position sum.
    pub profit_loss: Decimal,
}

impl DerivedStats {
    pub fn compute(balance: &AccountBalance, orders: &[ActiveOrder]) -> Self {
        Self {
            total_trades: orders.len(),
            win_rate: win_rate(orders),
            profit_loss: balance.total_usd,
        }
    }
}

/// Share of orders with strictly positive P&L, rounded half away from zero.
///
/// An empty order set is a 0% win rate, not a division error.
pub fn win_rate(orders: &[ActiveOrder]) -> u8 {
    if orders.is_empty() {
        return 0;
    }
    let wins = orders.iter().filter(|o| o.is_winning()).count();
    let pct = Decimal::from(wins) * Decimal::ONE_HUNDRED / Decimal::from(orders.len());
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0)
}
