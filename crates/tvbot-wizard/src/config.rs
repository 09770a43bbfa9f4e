//! Bot configuration accumulated by the wizard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tvbot_core::Exchange;

/// Candle timeframe the bot trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1d")]
    D1,
}

impl Timeframe {
    /// Wire identifier, as sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::D1 => "1d",
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Self::H1
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trading strategy driving the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// User-supplied Pine Script.
    Custom,
    Rsi,
    Macd,
    #[serde(rename = "bb")]
    BollingerBands,
}

impl StrategyKind {
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::Custom
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom => write!(f, "Custom"),
            Self::Rsi => write!(f, "RSI"),
            Self::Macd => write!(f, "MACD"),
            Self::BollingerBands => write!(f, "Bollinger Bands"),
        }
    }
}

/// Full bot configuration as assembled across the wizard steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub exchange: Exchange,
    pub symbol: String,
    pub timeframe: Timeframe,
    pub strategy: StrategyKind,
    pub max_positions: u32,
    /// Percent of the account risked per trade, in `(0, 100]`.
    pub risk_per_trade: Decimal,
    pub stop_loss: bool,
    pub take_profit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pine_script: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            exchange: Exchange::Binance,
            symbol: "BTCUSDT".to_string(),
            timeframe: Timeframe::H1,
            strategy: StrategyKind::Custom,
            max_positions: 1,
            risk_per_trade: Decimal::ONE,
            stop_loss: true,
            take_profit: true,
            pine_script: None,
        }
    }
}

/// A single named mutation of one [`BotConfig`] field.
///
/// The wizard accepts edits only through this enum, so every change flows
/// through one place regardless of which step is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigEdit {
    Name(String),
    Description(String),
    Exchange(Exchange),
    Symbol(String),
    Timeframe(Timeframe),
    Strategy(StrategyKind),
    MaxPositions(u32),
    RiskPerTrade(Decimal),
    StopLoss(bool),
    TakeProfit(bool),
    PineScript(Option<String>),
}

impl BotConfig {
    /// Apply one edit in place.
    pub fn apply(&mut self, edit: ConfigEdit) {
        match edit {
            ConfigEdit::Name(name) => self.name = name,
            ConfigEdit::Description(description) => self.description = description,
            ConfigEdit::Exchange(exchange) => self.exchange = exchange,
            ConfigEdit::Symbol(symbol) => self.symbol = symbol,
            ConfigEdit::Timeframe(timeframe) => self.timeframe = timeframe,
            ConfigEdit::Strategy(strategy) => self.strategy = strategy,
            ConfigEdit::MaxPositions(max_positions) => self.max_positions = max_positions,
            ConfigEdit::RiskPerTrade(risk) => self.risk_per_trade = risk,
            ConfigEdit::StopLoss(enabled) => self.stop_loss = enabled,
            ConfigEdit::TakeProfit(enabled) => self.take_profit = enabled,
            ConfigEdit::PineScript(script) => self.pine_script = script,
        }
    }
}
