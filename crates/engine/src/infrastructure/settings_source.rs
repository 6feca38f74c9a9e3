//! Concrete settings sources.

use std::fmt;
use std::sync::Arc;

use xpledger_domain::{ProgressionSettings, TraitCatalog};

use super::ports::{ProgressionSettingsSource, SettingsError};
use super::settings_loader::load_settings_with;

const SETTINGS: &str = "progression settings";
const CATALOG: &str = "trait catalog";

/// Fixed settings and catalog, validated once at construction.
///
/// Suited to embedding where the settings surface hands over whole JSON
/// documents, and to tests.
#[derive(Debug, Clone)]
pub struct StaticSettingsSource {
    settings: ProgressionSettings,
    catalog: TraitCatalog,
}

impl StaticSettingsSource {
    pub fn new(
        settings: ProgressionSettings,
        catalog: TraitCatalog,
    ) -> Result<Self, SettingsError> {
        settings
            .validate()
            .map_err(|e| SettingsError::from_domain(SETTINGS, e))?;
        Ok(Self { settings, catalog })
    }

    /// Build from the two JSON documents authored by the settings surface.
    pub fn from_json(settings_json: &str, catalog_json: &str) -> Result<Self, SettingsError> {
        let settings = ProgressionSettings::from_json(settings_json)
            .map_err(|e| SettingsError::from_domain(SETTINGS, e))?;
        let catalog = TraitCatalog::from_json(catalog_json)
            .map_err(|e| SettingsError::from_domain(CATALOG, e))?;
        Self::new(settings, catalog)
    }
}

impl ProgressionSettingsSource for StaticSettingsSource {
    fn settings(&self) -> Result<ProgressionSettings, SettingsError> {
        Ok(self.settings.clone())
    }

    fn trait_catalog(&self) -> Result<TraitCatalog, SettingsError> {
        Ok(self.catalog.clone())
    }
}

/// Reads one variable by name.
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Settings re-read from `XPLEDGER_*` environment variables on every call,
/// paired with a fixed catalog.
#[derive(Clone)]
pub struct EnvSettingsSource {
    catalog: TraitCatalog,
    lookup: EnvLookup,
}

impl EnvSettingsSource {
    /// Read the process environment.
    pub fn new(catalog: TraitCatalog) -> Self {
        Self::with_lookup(catalog, Arc::new(|key: &str| std::env::var(key).ok()))
    }

    /// Read variables through `lookup` instead of the process environment.
    pub fn with_lookup(catalog: TraitCatalog, lookup: EnvLookup) -> Self {
        Self { catalog, lookup }
    }
}

impl fmt::Debug for EnvSettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvSettingsSource")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl ProgressionSettingsSource for EnvSettingsSource {
    fn settings(&self) -> Result<ProgressionSettings, SettingsError> {
        let settings = load_settings_with(|key| (self.lookup)(key));
        settings
            .validate()
            .map_err(|e| SettingsError::from_domain(SETTINGS, e))?;
        Ok(settings)
    }

    fn trait_catalog(&self) -> Result<TraitCatalog, SettingsError> {
        Ok(self.catalog.clone())
    }
}
