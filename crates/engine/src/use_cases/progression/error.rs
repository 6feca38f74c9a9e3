//! Progression operation errors.

use xpledger_domain::DomainError;

use crate::infrastructure::ports::SettingsError;

/// Errors that can occur during progression operations.
///
/// Evaluation itself never fails; only settings access and finalize do.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("Character creation is not active")]
    CreationInactive,

    #[error("Creation budget overspent: {}", messages.join("; "))]
    Overspent { messages: Vec<String> },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}
