//! Value objects - Immutable objects defined by their attributes

mod settings;
mod skill_category;

pub use settings::{
    settings_metadata, CardRankConfig, CreationConfig, CreationMode, DistributionMode,
    ProgressionSettings, RankSlotTable, SettingsFieldMetadata, RANK_TIERS,
};
pub use skill_category::{
    ExperienceBucket, PricingRule, SkillCategory, BACKGROUND_COST_PER_RANK,
};
