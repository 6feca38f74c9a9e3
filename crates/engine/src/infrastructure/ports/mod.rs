//! Port traits for infrastructure boundaries.
//!
//! The progression engine owns no configuration. Settings and the trait
//! catalog are authored elsewhere and read through [`ProgressionSettingsSource`].

mod error;
mod settings;

pub use error::SettingsError;
pub use settings::ProgressionSettingsSource;

#[cfg(test)]
pub use settings::MockProgressionSettingsSource;
