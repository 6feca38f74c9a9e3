//! Progression use cases.
//!
//! Evaluates a character snapshot against the current settings and trait
//! catalog, and finalizes character creation.

mod error;
mod types;

pub use error::ProgressionError;
pub use types::{FinalizeMode, FinalizeOutcome, ProgressionReport};

use std::sync::Arc;

use xpledger_domain::progression::{
    attribute_totals, card_rank_for, compute_spent, resolve_effects, summarize,
    unmatched_traits, validate_creation, ActiveEffects,
};
use xpledger_domain::{CharacterSnapshot, ProgressionSettings, TraitCatalog};

use crate::infrastructure::ports::ProgressionSettingsSource;

// =============================================================================
// Pipeline
// =============================================================================

/// Run the full progression pipeline with explicit settings.
///
/// Pure apart from logging: the same inputs always give the same report.
pub fn evaluate_with(
    snapshot: &CharacterSnapshot,
    settings: &ProgressionSettings,
    catalog: &TraitCatalog,
) -> ProgressionReport {
    let unmatched: Vec<String> = unmatched_traits(snapshot.acquired_traits(), catalog)
        .into_iter()
        .map(|t| t.name.clone())
        .collect();
    for name in &unmatched {
        tracing::debug!(
            character_id = %snapshot.id,
            trait_name = %name,
            "Acquired trait has no catalog entry"
        );
    }

    let effects =
        ActiveEffects::from_effects(&resolve_effects(snapshot.acquired_traits(), catalog));
    let ledger = compute_spent(snapshot, &effects, settings);
    let summary = summarize(snapshot, &effects, &ledger);
    let creation = settings
        .creation
        .active
        .then(|| validate_creation(&ledger, snapshot, settings));
    let ready_to_finalize = match &creation {
        Some(report) => report.is_ready(),
        None => true,
    };

    tracing::debug!(
        character_id = %snapshot.id,
        gain = summary.gain,
        spent = summary.spent,
        remaining = summary.remaining,
        effects = effects.len(),
        creation_active = settings.creation.active,
        "Evaluated progression"
    );

    ProgressionReport {
        summary,
        ledger,
        attributes: attribute_totals(snapshot, &effects, settings),
        creation,
        ready_to_finalize,
        card_rank: card_rank_for(snapshot, &settings.card_rank),
        unmatched_traits: unmatched,
    }
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for progression use cases.
pub struct ProgressionUseCases {
    settings_source: Arc<dyn ProgressionSettingsSource>,
}

impl ProgressionUseCases {
    pub fn new(settings_source: Arc<dyn ProgressionSettingsSource>) -> Self {
        Self { settings_source }
    }

    /// Current settings and catalog, validated.
    fn load(&self) -> Result<(ProgressionSettings, TraitCatalog), ProgressionError> {
        let settings = self.settings_source.settings()?;
        settings.validate()?;
        let catalog = self.settings_source.trait_catalog()?;
        Ok((settings, catalog))
    }

    /// Evaluate a snapshot against the latest settings.
    pub fn evaluate(
        &self,
        snapshot: &CharacterSnapshot,
    ) -> Result<ProgressionReport, ProgressionError> {
        let (settings, catalog) = self.load()?;
        Ok(evaluate_with(snapshot, &settings, &catalog))
    }

    /// Finalize character creation.
    ///
    /// Returns a rebaselined copy of the snapshot; the input is untouched.
    /// With [`FinalizeMode::Confirm`] an overspent budget refuses the
    /// finalize. Creation must be active in either mode.
    pub fn finalize_creation(
        &self,
        snapshot: &CharacterSnapshot,
        mode: FinalizeMode,
    ) -> Result<FinalizeOutcome, ProgressionError> {
        let (settings, catalog) = self.load()?;
        if !settings.creation.active {
            return Err(ProgressionError::CreationInactive);
        }

        let effects =
            ActiveEffects::from_effects(&resolve_effects(snapshot.acquired_traits(), &catalog));
        let ledger = compute_spent(snapshot, &effects, &settings);
        let report = validate_creation(&ledger, snapshot, &settings);

        let overridden = !report.is_ready();
        if overridden {
            match mode {
                FinalizeMode::Confirm => {
                    return Err(ProgressionError::Overspent {
                        messages: report.overspent.clone(),
                    });
                }
                FinalizeMode::Override => {
                    tracing::warn!(
                        character_id = %snapshot.id,
                        overspent = report.overspent.len(),
                        "Finalizing character creation despite overspent budget"
                    );
                }
            }
        }

        tracing::info!(
            character_id = %snapshot.id,
            spent = ledger.total,
            overridden = overridden,
            "Finalized character creation"
        );

        Ok(FinalizeOutcome {
            snapshot: snapshot.rebaselined(),
            report,
            overridden,
        })
    }
}
