//! Bot configuration wizard
//!
//! A three-step state machine that accumulates a [`BotConfig`]:
//!
//! 1. **Basic info** - name and description
//! 2. **Trading parameters** - market, timeframe, position and risk limits
//! 3. **Strategy** - strategy kind and optional Pine Script body
//!
//! `next()` gates each advance on the current step being complete; `back()`
//! never validates. Field edits go through [`ConfigEdit`] and never move the
//! step. `commit()` is only available on the final step and leaves the wizard
//! untouched, so a failed downstream save can retry without re-entry; wiping
//! the form is an explicit `reset()`.

pub mod config;
pub mod error;
pub mod wizard;

pub use config::{BotConfig, ConfigEdit, StrategyKind, Timeframe};
pub use error::{WizardError, WizardResult};
pub use wizard::{BotWizard, WizardState, WizardStep};
