//! Errors raised at the settings boundary.

use xpledger_domain::DomainError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// The source has nothing to offer yet (e.g. settings never saved).
    #[error("{what} not available")]
    Unavailable { what: &'static str },

    /// A stored document exists but could not be read.
    #[error("Invalid {what}: {message}")]
    Invalid { what: &'static str, message: String },
}

impl SettingsError {
    pub fn unavailable(what: &'static str) -> Self {
        Self::Unavailable { what }
    }

    pub fn invalid(what: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            what,
            message: message.to_string(),
        }
    }

    /// Wrap a domain parse/validation failure for a named document.
    pub fn from_domain(what: &'static str, err: DomainError) -> Self {
        Self::invalid(what, err)
    }
}
