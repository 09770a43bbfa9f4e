//! The three-step wizard state machine.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{BotConfig, ConfigEdit};
use crate::error::{WizardError, WizardResult};

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BasicInfo,
    TradingParams,
    Strategy,
}

impl WizardStep {
    /// 1-based step number for display.
    pub fn number(&self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::TradingParams => 2,
            Self::Strategy => 3,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Strategy)
    }

    fn forward(self) -> Self {
        match self {
            Self::BasicInfo => Self::TradingParams,
            Self::TradingParams | Self::Strategy => Self::Strategy,
        }
    }

    fn backward(self) -> Self {
        match self {
            Self::Strategy => Self::TradingParams,
            Self::TradingParams | Self::BasicInfo => Self::BasicInfo,
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::BasicInfo
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BasicInfo => write!(f, "Basic Info"),
            Self::TradingParams => write!(f, "Trading Parameters"),
            Self::Strategy => write!(f, "Strategy"),
        }
    }
}

/// Serializable snapshot of the wizard, step as its 1-based number.
#[derive(Debug, Clone, Serialize)]
pub struct WizardState {
    pub step: u8,
    pub config: BotConfig,
}

/// Accumulates a [`BotConfig`] across three gated steps.
#[derive(Debug, Default)]
pub struct BotWizard {
    step: WizardStep,
    config: BotConfig,
}

impl BotWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Apply a single field edit. Never moves the step.
    pub fn edit(&mut self, edit: ConfigEdit) {
        self.config.apply(edit);
    }

    /// Validate the current step, then advance one step, clamping at the end.
    pub fn next(&mut self) -> WizardResult<WizardStep> {
        self.validate_step(self.step)?;

        let from = self.step;
        self.step = self.step.forward();
        if self.step != from {
            debug!(from = from.number(), to = self.step.number(), "Wizard advanced");
        }
        Ok(self.step)
    }

    /// Retreat one step, clamping at the start. Never validates.
    pub fn back(&mut self) -> WizardStep {
        let from = self.step;
        self.step = self.step.backward();
        if self.step != from {
            debug!(from = from.number(), to = self.step.number(), "Wizard stepped back");
        }
        self.step
    }

    /// Emit the accumulated config.
    ///
    /// Only callable from the final step, and every step is re-validated
    /// first so edits made after advancing past a step cannot slip through.
    /// The wizard is left untouched; a failed downstream save can call this
    /// again, and wiping the form is an explicit [`reset`](Self::reset).
    pub fn commit(&self) -> WizardResult<BotConfig> {
        if !self.step.is_final() {
            return Err(WizardError::NotAtFinalStep);
        }

        for step in [
            WizardStep::BasicInfo,
            WizardStep::TradingParams,
            WizardStep::Strategy,
        ] {
            self.validate_step(step)?;
        }

        info!(
            name = %self.config.name,
            symbol = %self.config.symbol,
            strategy = %self.config.strategy,
            "Bot config committed"
        );
        Ok(self.config.clone())
    }

    /// Return to step one with a default config.
    pub fn reset(&mut self) {
        debug!("Wizard reset");
        *self = Self::default();
    }

    /// Serializable snapshot of step and config.
    pub fn state(&self) -> WizardState {
        WizardState {
            step: self.step.number(),
            config: self.config.clone(),
        }
    }

    fn validate_step(&self, step: WizardStep) -> WizardResult<()> {
        match step {
            WizardStep::BasicInfo => {
                if self.config.name.trim().is_empty() {
                    return Err(incomplete(step, "bot name is required"));
                }
            }
            WizardStep::TradingParams => {
                if self.config.max_positions == 0 {
                    return Err(incomplete(step, "max positions must be at least 1"));
                }
                if self.config.risk_per_trade <= Decimal::ZERO
                    || self.config.risk_per_trade > Decimal::ONE_HUNDRED
                {
                    return Err(incomplete(
                        step,
                        "risk per trade must be between 0 and 100 percent",
                    ));
                }
            }
            WizardStep::Strategy => {}
        }
        Ok(())
    }
}

fn incomplete(step: WizardStep, reason: &str) -> WizardError {
    WizardError::StepIncomplete {
        step,
        reason: reason.to_string(),
    }
}
