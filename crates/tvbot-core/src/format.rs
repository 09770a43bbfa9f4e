//! Display formatting for dashboard rows.
//!
//! Pure string derivations consumed at the presentation boundary; actual
//! rendering happens outside this workspace.

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;

/// Quantities display with four decimal places.
pub fn format_quantity(quantity: Decimal) -> String {
    format!("{quantity:.4}")
}

/// Entry price column; market orders have no limit price.
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) => format!("{p:.2}"),
        None => "Market".to_string(),
    }
}

/// Current price column; `--` when the backend cannot mark the order.
pub fn format_current_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) => format!("{p:.2}"),
        None => "--".to_string(),
    }
}

/// Per-order P&L, explicitly signed so gains read `+12.50`; `--` when
/// unknown.
pub fn format_pnl(pnl: Option<Decimal>) -> String {
    match pnl {
        Some(p) if p >= Decimal::ZERO => format!("+{p:.2}"),
        Some(p) => format!("{p:.2}"),
        None => "--".to_string(),
    }
}

/// Dollar amounts with two decimals, sign ahead of the `$`.
pub fn format_usd(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-${:.2}", -amount)
    } else {
        format!("${amount:.2}")
    }
}

/// Local wall-clock time of the last successful refresh, `Never` before the
/// first one.
pub fn format_last_update(last_update: Option<DateTime<Utc>>) -> String {
    match last_update {
        Some(ts) => ts.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "Never".to_string(),
    }
}

/// Mask an API key for display: first four and last four characters.
///
/// Keys too short to mask meaningfully are hidden entirely.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len().max(4));
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
