use xpledger_domain::{ProgressionSettings, TraitCatalog};

use super::error::SettingsError;

/// Supplies the externally authored configuration read by every evaluation.
///
/// Implementations return the latest values on each call; the engine never
/// caches them between evaluations.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressionSettingsSource: Send + Sync {
    fn settings(&self) -> Result<ProgressionSettings, SettingsError>;
    fn trait_catalog(&self) -> Result<TraitCatalog, SettingsError>;
}
