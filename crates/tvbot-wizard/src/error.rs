//! Wizard error types.

use thiserror::Error;

use crate::wizard::WizardStep;

#[derive(Debug, Error)]
pub enum WizardError {
    /// A step failed validation, either when advancing past it or during the
    /// full re-check at commit.
    #[error("{step} step incomplete: {reason}")]
    StepIncomplete { step: WizardStep, reason: String },

    /// `commit()` called before reaching the final step.
    #[error("Bot config can only be committed from the final step")]
    NotAtFinalStep,
}

pub type WizardResult<T> = Result<T, WizardError>;
