//! Unified error types for the domain layer
//!
//! The progression rules themselves are total functions and never fail.
//! Errors only exist at the configuration boundary: parsing enumerated
//! settings, loading settings or catalog documents, and validating settings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid setting values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects and documents)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for settings that break a rule.
    ///
    /// # Example
    /// ```ignore
    /// if increment <= 0.0 {
    ///     return Err(DomainError::validation("card rank increment must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant, and when a settings or catalog
    /// document is not valid JSON for its shape.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
