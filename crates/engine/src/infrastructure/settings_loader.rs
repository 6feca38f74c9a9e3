//! Settings loader for reading ProgressionSettings from environment variables
//!
//! The domain defines WHAT settings exist; reading them from the process
//! environment is an infrastructure concern and lives here.

use std::str::FromStr;

use xpledger_domain::{CardRankConfig, CreationConfig, ProgressionSettings};

/// Read `key` through `lookup`, falling back to `default` when the variable is
/// missing or does not parse.
fn env_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key = %key, value = %raw, "Unparseable settings value, using default");
            default
        }
    }
}

/// Load ProgressionSettings from environment variables with defaults for
/// missing values.
///
/// # Environment Variables
///
/// Creation:
/// - `XPLEDGER_CREATION_ACTIVE` - Character creation in progress (default: false)
/// - `XPLEDGER_CREATION_MODE` - `points` or `ranks` (default: points)
/// - `XPLEDGER_CREATION_DISTRIBUTION` - `global` or `buckets` (default: global)
///
/// Points budgets:
/// - `XPLEDGER_STARTING_XP` - Global creation pool (default: 350)
/// - `XPLEDGER_ATTRIBUTE_XP` - Attribute bucket (default: 120)
/// - `XPLEDGER_SKILL_XP` - Skill bucket (default: 190)
/// - `XPLEDGER_BACKGROUND_XP` - Background bucket (default: 40)
///
/// Attribute bounds:
/// - `XPLEDGER_ATTRIBUTE_MIN` - Lowest allowed attribute (default: -2)
/// - `XPLEDGER_ATTRIBUTE_MAX` - Highest allowed attribute (default: 5)
///
/// Ranks mode:
/// - `XPLEDGER_RANK_SLOTS` - Slots for tiers 1-5, comma separated (default: 4,3,2,1,0)
/// - `XPLEDGER_ATTRIBUTE_POINTS` - Attribute point pool (default: 10)
/// - `XPLEDGER_BACKGROUND_POINTS` - Background point pool (default: 6)
///
/// Pricing:
/// - `XPLEDGER_ATTRIBUTE_COST_PER_POINT` - XP per attribute point (default: 6)
/// - `XPLEDGER_SECONDARY_ATTRIBUTES` - Price secondary attributes (default: false)
///
/// Card rank:
/// - `XPLEDGER_CARD_RANK_ENABLED` - Compute card rank (default: false)
/// - `XPLEDGER_CARD_RANK_BEST_SKILLS` - Skills averaged (default: 6)
/// - `XPLEDGER_CARD_RANK_BASE` - Average at which the ladder starts (default: 2.0)
/// - `XPLEDGER_CARD_RANK_INCREMENT` - Average per ladder step (default: 0.5)
///
/// # Example
///
/// ```rust,ignore
/// use xpledger_engine::infrastructure::settings_loader::load_settings_from_env;
///
/// let settings = load_settings_from_env();
/// println!("Starting XP: {}", settings.creation.starting_xp);
/// ```
pub fn load_settings_from_env() -> ProgressionSettings {
    load_settings_with(|key| std::env::var(key).ok())
}

/// Same as [`load_settings_from_env`], reading variables through `lookup`.
pub fn load_settings_with<F>(lookup: F) -> ProgressionSettings
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ProgressionSettings::default();
    let creation = defaults.creation;
    let card_rank = defaults.card_rank;

    ProgressionSettings {
        creation: CreationConfig {
            active: env_or(&lookup, "XPLEDGER_CREATION_ACTIVE", creation.active),
            mode: env_or(&lookup, "XPLEDGER_CREATION_MODE", creation.mode),
            distribution: env_or(
                &lookup,
                "XPLEDGER_CREATION_DISTRIBUTION",
                creation.distribution,
            ),
            starting_xp: env_or(&lookup, "XPLEDGER_STARTING_XP", creation.starting_xp),
            attribute_xp: env_or(&lookup, "XPLEDGER_ATTRIBUTE_XP", creation.attribute_xp),
            skill_xp: env_or(&lookup, "XPLEDGER_SKILL_XP", creation.skill_xp),
            background_xp: env_or(&lookup, "XPLEDGER_BACKGROUND_XP", creation.background_xp),
            attribute_min: env_or(&lookup, "XPLEDGER_ATTRIBUTE_MIN", creation.attribute_min),
            attribute_max: env_or(&lookup, "XPLEDGER_ATTRIBUTE_MAX", creation.attribute_max),
            rank_slots: env_or(&lookup, "XPLEDGER_RANK_SLOTS", creation.rank_slots),
            attribute_points: env_or(
                &lookup,
                "XPLEDGER_ATTRIBUTE_POINTS",
                creation.attribute_points,
            ),
            background_points: env_or(
                &lookup,
                "XPLEDGER_BACKGROUND_POINTS",
                creation.background_points,
            ),
        },
        attribute_cost_per_point: env_or(
            &lookup,
            "XPLEDGER_ATTRIBUTE_COST_PER_POINT",
            defaults.attribute_cost_per_point,
        ),
        secondary_attributes_enabled: env_or(
            &lookup,
            "XPLEDGER_SECONDARY_ATTRIBUTES",
            defaults.secondary_attributes_enabled,
        ),
        card_rank: CardRankConfig {
            enabled: env_or(&lookup, "XPLEDGER_CARD_RANK_ENABLED", card_rank.enabled),
            best_skills_count: env_or(
                &lookup,
                "XPLEDGER_CARD_RANK_BEST_SKILLS",
                card_rank.best_skills_count,
            ),
            base_start: env_or(&lookup, "XPLEDGER_CARD_RANK_BASE", card_rank.base_start),
            increment: env_or(&lookup, "XPLEDGER_CARD_RANK_INCREMENT", card_rank.increment),
        },
    }
}
