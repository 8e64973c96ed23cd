use thiserror::Error;

use crate::navigation::{NavAction, WizardState};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown field: `{0}`")]
    UnknownField(String),
    #[error("Cannot {action} while at {state}")]
    InvalidTransition {
        action: NavAction,
        state: WizardState,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}
