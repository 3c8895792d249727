//! Error types for wizard operations

use thiserror::Error;

use super::catalog::Step;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("pipeline can only be started from the Review & Start step (current: {current})")]
    RunNotAllowed { current: Step },
}

pub type Result<T> = std::result::Result<T, WizardError>;
