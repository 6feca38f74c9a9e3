//! Progression settings value object
//!
//! # Architectural Note
//!
//! `ProgressionSettings` includes serde derives because the settings are
//! authored by an external settings surface and handed to the engine as a
//! JSON document. The JSON shape IS the contract for these settings.
//!
//! The engine only reads these values. Every engine call receives them as an
//! explicit argument; nothing here is looked up from ambient state.
//!
//! Environment loading lives in the engine crate
//! (`infrastructure::settings_loader`) to keep I/O out of the domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Number of rank tiers available in `ranks` creation mode.
pub const RANK_TIERS: usize = 5;

/// How character creation budgets are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationMode {
    /// Experience points priced by the progression ledger
    #[default]
    Points,
    /// Rank slots per tier plus flat attribute/background pools
    Ranks,
}

impl fmt::Display for CreationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points => write!(f, "points"),
            Self::Ranks => write!(f, "ranks"),
        }
    }
}

impl FromStr for CreationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" | "xp" => Ok(Self::Points),
            "ranks" | "rank" => Ok(Self::Ranks),
            other => Err(DomainError::parse(format!("Unknown creation mode: {}", other))),
        }
    }
}

/// How a `points` creation budget is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    /// One pool for everything
    #[default]
    Global,
    /// Separate attribute, skill, and background pools
    Buckets,
}

impl fmt::Display for DistributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Buckets => write!(f, "buckets"),
        }
    }
}

impl FromStr for DistributionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "buckets" | "bucket" => Ok(Self::Buckets),
            other => Err(DomainError::parse(format!(
                "Unknown distribution mode: {}",
                other
            ))),
        }
    }
}

/// Available skill slots for rank tiers 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSlotTable([u32; RANK_TIERS]);

impl RankSlotTable {
    pub fn new(slots: [u32; RANK_TIERS]) -> Self {
        Self(slots)
    }

    /// Slots configured for `tier` (1-based). Tiers outside 1..=5 have none.
    pub fn slots_for(&self, tier: i32) -> u32 {
        usize::try_from(tier)
            .ok()
            .and_then(|t| t.checked_sub(1))
            .and_then(|idx| self.0.get(idx))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for RankSlotTable {
    fn default() -> Self {
        Self([4, 3, 2, 1, 0])
    }
}

/// Parses a comma-separated list of exactly five slot counts, e.g. `4,3,2,1,0`.
impl FromStr for RankSlotTable {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u32>()
                    .map_err(|_| DomainError::parse(format!("Invalid rank slot count: {}", part)))
            })
            .collect::<Result<Vec<u32>, _>>()?;
        let slots: [u32; RANK_TIERS] = counts.try_into().map_err(|counts: Vec<u32>| {
            DomainError::parse(format!(
                "Expected {} rank slot counts, got {}",
                RANK_TIERS,
                counts.len()
            ))
        })?;
        Ok(Self(slots))
    }
}

/// Character creation budgets. Authored by the settings surface, read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationConfig {
    /// Whether a character is currently being created
    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub mode: CreationMode,

    #[serde(default)]
    pub distribution: DistributionMode,

    // ============================================================================
    // Points mode budgets
    // ============================================================================

    /// Single pool for `points` + `global`
    #[serde(default = "default_starting_xp")]
    pub starting_xp: i32,
    /// Attribute pool for `points` + `buckets`
    #[serde(default = "default_attribute_xp")]
    pub attribute_xp: i32,
    /// Skill pool (standard and secondary) for `points` + `buckets`
    #[serde(default = "default_skill_xp")]
    pub skill_xp: i32,
    /// Background pool for `points` + `buckets`
    #[serde(default = "default_background_xp")]
    pub background_xp: i32,

    // ============================================================================
    // Attribute bounds (all modes)
    // ============================================================================

    #[serde(default = "default_attribute_min")]
    pub attribute_min: i32,
    #[serde(default = "default_attribute_max")]
    pub attribute_max: i32,

    // ============================================================================
    // Ranks mode
    // ============================================================================

    #[serde(default)]
    pub rank_slots: RankSlotTable,
    /// Sum of attribute values allowed in `ranks` mode
    #[serde(default = "default_attribute_points")]
    pub attribute_points: i32,
    /// Sum of background values allowed in `ranks` mode
    #[serde(default = "default_background_points")]
    pub background_points: i32,
}

fn default_starting_xp() -> i32 { 350 }
fn default_attribute_xp() -> i32 { 120 }
fn default_skill_xp() -> i32 { 190 }
fn default_background_xp() -> i32 { 40 }
fn default_attribute_min() -> i32 { -2 }
fn default_attribute_max() -> i32 { 5 }
fn default_attribute_points() -> i32 { 10 }
fn default_background_points() -> i32 { 6 }

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            active: false,
            mode: CreationMode::default(),
            distribution: DistributionMode::default(),
            starting_xp: default_starting_xp(),
            attribute_xp: default_attribute_xp(),
            skill_xp: default_skill_xp(),
            background_xp: default_background_xp(),
            attribute_min: default_attribute_min(),
            attribute_max: default_attribute_max(),
            rank_slots: RankSlotTable::default(),
            attribute_points: default_attribute_points(),
            background_points: default_background_points(),
        }
    }
}

/// Card rank feature settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRankConfig {
    #[serde(default)]
    pub enabled: bool,
    /// How many top skills are averaged
    #[serde(default = "default_best_skills_count")]
    pub best_skills_count: usize,
    /// Average at which the first tier starts counting
    #[serde(default = "default_base_start")]
    pub base_start: f64,
    /// Average increase per tier
    #[serde(default = "default_increment")]
    pub increment: f64,
}

fn default_best_skills_count() -> usize { 6 }
fn default_base_start() -> f64 { 2.0 }
fn default_increment() -> f64 { 0.5 }

impl Default for CardRankConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            best_skills_count: default_best_skills_count(),
            base_start: default_base_start(),
            increment: default_increment(),
        }
    }
}

/// All settings read by the progression engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionSettings {
    #[serde(default)]
    pub creation: CreationConfig,

    /// Experience per attribute point above the free allowance
    #[serde(default = "default_attribute_cost_per_point")]
    pub attribute_cost_per_point: i32,

    /// Whether the parallel secondary attribute set is priced and checked
    #[serde(default)]
    pub secondary_attributes_enabled: bool,

    #[serde(default)]
    pub card_rank: CardRankConfig,
}

fn default_attribute_cost_per_point() -> i32 { 6 }

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            creation: CreationConfig::default(),
            attribute_cost_per_point: default_attribute_cost_per_point(),
            secondary_attributes_enabled: false,
            card_rank: CardRankConfig::default(),
        }
    }
}

impl ProgressionSettings {
    /// Parse a settings document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the settings for values the engine cannot price sensibly.
    ///
    /// The progression rules never call this; they price whatever they are
    /// given. Settings sources and use cases validate at the boundary.
    pub fn validate(&self) -> Result<(), DomainError> {
        let creation = &self.creation;
        if creation.attribute_min > creation.attribute_max {
            return Err(DomainError::validation(format!(
                "attribute minimum {} is above maximum {}",
                creation.attribute_min, creation.attribute_max
            )));
        }
        let budgets = [
            ("startingXp", creation.starting_xp),
            ("attributeXp", creation.attribute_xp),
            ("skillXp", creation.skill_xp),
            ("backgroundXp", creation.background_xp),
            ("attributePoints", creation.attribute_points),
            ("backgroundPoints", creation.background_points),
            ("attributeCostPerPoint", self.attribute_cost_per_point),
        ];
        if let Some((name, value)) = budgets.iter().find(|(_, value)| *value < 0) {
            return Err(DomainError::validation(format!(
                "{} cannot be negative (got {})",
                name, value
            )));
        }
        if !(self.card_rank.increment.is_finite() && self.card_rank.increment > 0.0) {
            return Err(DomainError::validation(
                "card rank increment must be a positive number",
            ));
        }
        if !self.card_rank.base_start.is_finite() {
            return Err(DomainError::validation("card rank base start must be finite"));
        }
        Ok(())
    }
}

/// Settings field metadata for UI rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFieldMetadata {
    /// Field key (JSON path of the field)
    pub key: String,
    /// Display name for UI
    pub display_name: String,
    /// Description/help text
    pub description: String,
    /// Field type: "integer", "float", "boolean", "enum"
    pub field_type: String,
    /// Default value
    pub default_value: serde_json::Value,
    /// Category for grouping in UI
    pub category: String,
}

/// Get metadata for all settings fields
pub fn settings_metadata() -> Vec<SettingsFieldMetadata> {
    let defaults = ProgressionSettings::default();
    let creation = &defaults.creation;
    let card = &defaults.card_rank;
    vec![
        // Creation
        SettingsFieldMetadata {
            key: "creation.mode".into(),
            display_name: "Creation Mode".into(),
            description: "Experience points or rank slots".into(),
            field_type: "enum".into(),
            default_value: serde_json::json!(creation.mode),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.distribution".into(),
            display_name: "Point Distribution".into(),
            description: "One global pool or separate buckets".into(),
            field_type: "enum".into(),
            default_value: serde_json::json!(creation.distribution),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.startingXp".into(),
            display_name: "Starting Experience".into(),
            description: "Global creation pool".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(creation.starting_xp),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.attributeXp".into(),
            display_name: "Attribute Budget".into(),
            description: "Attribute bucket in bucketed creation".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(creation.attribute_xp),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.skillXp".into(),
            display_name: "Skill Budget".into(),
            description: "Skill bucket in bucketed creation".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(creation.skill_xp),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.backgroundXp".into(),
            display_name: "Background Budget".into(),
            description: "Background bucket in bucketed creation".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(creation.background_xp),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.attributeMin".into(),
            display_name: "Attribute Minimum".into(),
            description: "Lowest attribute value allowed at creation".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(creation.attribute_min),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.attributeMax".into(),
            display_name: "Attribute Maximum".into(),
            description: "Highest attribute value allowed at creation".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(creation.attribute_max),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.attributePoints".into(),
            display_name: "Attribute Points".into(),
            description: "Attribute pool in rank creation".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(creation.attribute_points),
            category: "Creation".into(),
        },
        SettingsFieldMetadata {
            key: "creation.backgroundPoints".into(),
            display_name: "Background Points".into(),
            description: "Background pool in rank creation".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(creation.background_points),
            category: "Creation".into(),
        },
        // Progression
        SettingsFieldMetadata {
            key: "attributeCostPerPoint".into(),
            display_name: "Attribute Cost".into(),
            description: "Experience per attribute point".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(defaults.attribute_cost_per_point),
            category: "Progression".into(),
        },
        SettingsFieldMetadata {
            key: "secondaryAttributesEnabled".into(),
            display_name: "Secondary Attributes".into(),
            description: "Price and check the secondary attribute set".into(),
            field_type: "boolean".into(),
            default_value: serde_json::json!(defaults.secondary_attributes_enabled),
            category: "Progression".into(),
        },
        // Card rank
        SettingsFieldMetadata {
            key: "cardRank.enabled".into(),
            display_name: "Card Rank".into(),
            description: "Show the card rank label".into(),
            field_type: "boolean".into(),
            default_value: serde_json::json!(card.enabled),
            category: "Card Rank".into(),
        },
        SettingsFieldMetadata {
            key: "cardRank.bestSkillsCount".into(),
            display_name: "Best Skills Counted".into(),
            description: "Top skills averaged for the card rank".into(),
            field_type: "integer".into(),
            default_value: serde_json::json!(card.best_skills_count),
            category: "Card Rank".into(),
        },
        SettingsFieldMetadata {
            key: "cardRank.baseStart".into(),
            display_name: "Base Average".into(),
            description: "Average where the first tier starts".into(),
            field_type: "float".into(),
            default_value: serde_json::json!(card.base_start),
            category: "Card Rank".into(),
        },
        SettingsFieldMetadata {
            key: "cardRank.increment".into(),
            display_name: "Tier Increment".into(),
            description: "Average increase per tier".into(),
            field_type: "float".into(),
            default_value: serde_json::json!(card.increment),
            category: "Card Rank".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_slots_parse_from_list() {
        let table: RankSlotTable = " 5, 4,3 ,0,1".parse().expect("five counts");
        assert_eq!(table, RankSlotTable::new([5, 4, 3, 0, 1]));
        assert_eq!(table.slots_for(5), 1);
        assert_eq!(table.slots_for(6), 0);
        assert!("4,3,2".parse::<RankSlotTable>().is_err());
        assert!("4,3,2,1,x".parse::<RankSlotTable>().is_err());
    }

    #[test]
    fn defaults_are_valid() {
        let settings = ProgressionSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.attribute_cost_per_point, 6);
        assert_eq!(settings.creation.starting_xp, 350);
        assert!(!settings.card_rank.enabled);
    }

    #[test]
    fn partial_document_fills_defaults() {
        let settings = ProgressionSettings::from_json(
            r#"{"creation": {"active": true, "mode": "ranks"}, "cardRank": {"enabled": true}}"#,
        )
        .expect("valid settings");
        assert!(settings.creation.active);
        assert_eq!(settings.creation.mode, CreationMode::Ranks);
        assert_eq!(settings.creation.distribution, DistributionMode::Global);
        assert_eq!(settings.creation.rank_slots, RankSlotTable::default());
        assert!(settings.card_rank.enabled);
        assert_eq!(settings.card_rank.best_skills_count, 6);
    }

    #[test]
    fn rank_slots_serialize_as_array() {
        let settings = ProgressionSettings::from_json(
            r#"{"creation": {"rankSlots": [5, 4, 3, 2, 1]}}"#,
        )
        .expect("valid settings");
        assert_eq!(settings.creation.rank_slots.slots_for(1), 5);
        assert_eq!(settings.creation.rank_slots.slots_for(5), 1);
        assert_eq!(settings.creation.rank_slots.slots_for(0), 0);
        assert_eq!(settings.creation.rank_slots.slots_for(6), 0);
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = ProgressionSettings::from_json("{not json").expect_err("malformed");
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn inverted_attribute_bounds_rejected() {
        let mut settings = ProgressionSettings::default();
        settings.creation.attribute_min = 3;
        settings.creation.attribute_max = 1;
        assert!(matches!(settings.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn negative_budget_rejected() {
        let mut settings = ProgressionSettings::default();
        settings.creation.skill_xp = -1;
        let err = settings.validate().expect_err("negative budget");
        assert!(err.to_string().contains("skillXp"));
    }

    #[test]
    fn zero_increment_rejected() {
        let mut settings = ProgressionSettings::default();
        settings.card_rank.increment = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn modes_parse_from_str() {
        assert_eq!("Ranks".parse::<CreationMode>(), Ok(CreationMode::Ranks));
        assert_eq!(" buckets".parse::<DistributionMode>(), Ok(DistributionMode::Buckets));
        assert!("pyramid".parse::<CreationMode>().is_err());
        assert_eq!(CreationMode::Points.to_string(), "points");
    }

    #[test]
    fn metadata_covers_card_rank() {
        let metadata = settings_metadata();
        assert!(metadata.iter().any(|m| m.key == "cardRank.increment"));
        assert!(metadata.iter().all(|m| !m.category.is_empty()));
    }
}
