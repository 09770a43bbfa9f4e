//! Webhook settings editor.
//!
//! Holds a working copy of the bot's webhook settings, applies field edits,
//! validates, and saves the result back through the backend.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};
use tvbot_api::{ApiError, TradingApi};
use tvbot_core::{BotSettings, CurrencyType};
use tvbot_telemetry::Metrics;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub struct SettingsEditor {
    api: Arc<dyn TradingApi>,
    settings: RwLock<BotSettings>,
}

impl SettingsEditor {
    pub fn new(api: Arc<dyn TradingApi>) -> Self {
        Self {
            api,
            settings: RwLock::new(BotSettings::default()),
        }
    }

    /// Replace the working copy with the backend's current settings.
    pub async fn load(&self) -> AppResult<()> {
        let settings = self.api.fetch_settings().await?;
        info!(bot_uuid = %settings.bot_uuid, "Loaded bot settings");
        *self.settings.write() = settings;
        Ok(())
    }

    /// Current working copy.
    pub fn settings(&self) -> BotSettings {
        self.settings.read().clone()
    }

    pub fn set_secret(&self, secret: impl Into<String>) {
        self.settings.write().secret = secret.into();
    }

    pub fn set_max_lag(&self, max_lag: impl Into<String>) {
        self.settings.write().max_lag = max_lag.into();
    }

    pub fn set_bot_uuid(&self, bot_uuid: impl Into<String>) {
        self.settings.write().bot_uuid = bot_uuid.into();
    }

    pub fn set_currency_type(&self, currency_type: CurrencyType) {
        self.settings.write().currency_type = currency_type;
    }

    /// Check the working copy without talking to the backend.
    pub fn validate(&self) -> AppResult<()> {
        validate_settings(&self.settings.read())
    }

    /// Validate, save, and keep the copy the backend returns.
    pub async fn save(&self) -> AppResult<()> {
        self.validate()?;

        let settings = self.settings.read().clone();
        match self.api.save_settings(&settings).await {
            Ok(stored) => {
                Metrics::settings_save("success");
                info!("Bot settings saved");
                *self.settings.write() = stored;
                Ok(())
            }
            Err(error) => {
                Metrics::settings_save("failure");
                warn!(error = %error, "Settings save failed");
                Err(save_error(error))
            }
        }
    }
}

/// Field-level checks. Empty fields pass; the backend treats them as unset.
pub fn validate_settings(settings: &BotSettings) -> AppResult<()> {
    if !settings.bot_uuid.is_empty() && Uuid::parse_str(&settings.bot_uuid).is_err() {
        return Err(AppError::Settings(
            "Bot UUID is not a valid UUID".to_string(),
        ));
    }

    if !settings.max_lag.is_empty() {
        match settings.max_lag.parse::<f64>() {
            Ok(lag) if lag >= 0.0 => {}
            _ => {
                return Err(AppError::Settings(
                    "Max lag must be a non-negative number of seconds".to_string(),
                ))
            }
        }
    }

    Ok(())
}

/// The backend reports save failures with the message in a `detail` field.
fn save_error(error: ApiError) -> AppError {
    if let ApiError::Http { body, .. } = &error {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
                return AppError::Settings(detail.to_string());
            }
        }
    }
    AppError::Api(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(bot_uuid: &str, max_lag: &str) -> BotSettings {
        BotSettings {
            bot_uuid: bot_uuid.to_string(),
            max_lag: max_lag.to_string(),
            ..BotSettings::default()
        }
    }

    #[test]
    fn test_empty_fields_pass_validation() {
        assert!(validate_settings(&BotSettings::default()).is_ok());
    }

    #[test]
    fn test_valid_uuid_and_lag_pass() {
        let settings = settings_with("550e8400-e29b-41d4-a716-446655440000", "2.5");
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_malformed_uuid_rejected() {
        let settings = settings_with("not-a-uuid", "");
        let error = validate_settings(&settings).unwrap_err();
        assert!(matches!(error, AppError::Settings(_)));
    }

    #[test]
    fn test_negative_max_lag_rejected() {
        let settings = settings_with("", "-1");
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_non_numeric_max_lag_rejected() {
        let settings = settings_with("", "fast");
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_save_error_extracts_detail() {
        let error = save_error(ApiError::Http {
            status: 400,
            body: r#"{"detail":"Invalid webhook secret"}"#.to_string(),
        });
        assert!(matches!(
            error,
            AppError::Settings(message) if message == "Invalid webhook secret"
        ));
    }

    #[test]
    fn test_save_error_passes_through_other_failures() {
        let error = save_error(ApiError::Transport("connection refused".to_string()));
        assert!(matches!(error, AppError::Api(_)));
    }
}
