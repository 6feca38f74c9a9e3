//! Progression and experience accounting for a tabletop character sheet.
//!
//! Pure domain logic: no I/O, no logging, no clocks. The engine crate wraps
//! these functions with settings loading and diagnostics.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod progression;
pub mod value_objects;

pub use entities::{
    AcquiredTrait, AttributeGroup, CharacterSnapshot, Effect, ExperienceGrant, PricedEntity,
    RawRank, TraitCatalog, TraitCatalogEntry, TraitKind,
};

pub use error::DomainError;

pub use ids::{CharacterId, EntityId, TraitId};

pub use progression::{
    attribute_totals, card_rank, card_rank_for, compute_spent, resolve_effects, summarize,
    validate_creation, ActiveEffects, AttributeTotal, BucketTotals, BudgetGauge, BudgetReport,
    ExperienceSummary, SpentLedger,
};

pub use value_objects::{
    settings_metadata, CardRankConfig, CreationConfig, CreationMode, DistributionMode,
    ExperienceBucket, PricingRule, ProgressionSettings, RankSlotTable, SettingsFieldMetadata,
    SkillCategory,
};
