//! Webhook bot settings round-tripped through `/api/settings`.

use serde::{Deserialize, Serialize};

/// Which side of the pair webhook order quantities are denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    Base,
    Quote,
}

impl Default for CurrencyType {
    fn default() -> Self {
        Self::Base
    }
}

impl std::fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Quote => write!(f, "quote"),
        }
    }
}

/// Settings for the TradingView webhook listener.
///
/// `max_lag` (seconds) and `bot_uuid` stay strings on the wire; the backend
/// parses them. Local validation happens at the settings editor before save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BotSettings {
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub max_lag: String,
    #[serde(default)]
    pub bot_uuid: String,
    #[serde(default)]
    pub currency_type: CurrencyType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_settings() {
        let json = r#"{
            "secret": "whk_123",
            "max_lag": "5",
            "bot_uuid": "550e8400-e29b-41d4-a716-446655440000",
            "currency_type": "quote"
        }"#;

        let settings: BotSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.secret, "whk_123");
        assert_eq!(settings.max_lag, "5");
        assert_eq!(settings.currency_type, CurrencyType::Quote);
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let settings: BotSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, BotSettings::default());
        assert_eq!(settings.currency_type, CurrencyType::Base);
    }

    #[test]
    fn test_serialize_wire_shape() {
        let settings = BotSettings {
            secret: "s".to_string(),
            max_lag: "2.5".to_string(),
            bot_uuid: String::new(),
            currency_type: CurrencyType::Base,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(
            json,
            r#"{"secret":"s","max_lag":"2.5","bot_uuid":"","currency_type":"base"}"#
        );
    }
}
