//! Skill categories and their pricing rules.
//!
//! The sheet has eight fixed skill columns. Each column is priced by a
//! [`PricingRule`] looked up from the category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Cost of one rank on a background trait.
pub const BACKGROUND_COST_PER_RANK: f64 = 2.0;

/// The eight fixed skill columns on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    /// First main skill column
    Main1,
    /// Second main skill column
    Main2,
    /// Third main skill column
    Main3,
    /// Fourth main skill column
    Main4,
    /// First "other skills" column
    Other1,
    /// Second "other skills" column
    Other2,
    /// Secondary skills (half price, half slot)
    Secondary,
    /// Background traits (linear price, own budget)
    Background,
}

impl SkillCategory {
    /// All categories in sheet order.
    pub const ALL: [SkillCategory; 8] = [
        Self::Main1,
        Self::Main2,
        Self::Main3,
        Self::Main4,
        Self::Other1,
        Self::Other2,
        Self::Secondary,
        Self::Background,
    ];

    /// The six standard columns priced with the full triangular formula.
    pub const STANDARD: [SkillCategory; 6] = [
        Self::Main1,
        Self::Main2,
        Self::Main3,
        Self::Main4,
        Self::Other1,
        Self::Other2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main1 => "main1",
            Self::Main2 => "main2",
            Self::Main3 => "main3",
            Self::Main4 => "main4",
            Self::Other1 => "other1",
            Self::Other2 => "other2",
            Self::Secondary => "secondary",
            Self::Background => "background",
        }
    }

    /// How experience is charged for ranks in this category.
    pub fn pricing_rule(&self) -> PricingRule {
        match self {
            Self::Secondary => PricingRule::HalfTriangular,
            Self::Background => PricingRule::Linear {
                per_rank: BACKGROUND_COST_PER_RANK,
            },
            _ => PricingRule::Triangular,
        }
    }

    /// One of the six full-price columns.
    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Secondary | Self::Background)
    }

    /// Whether free-skill-rank effects can lift the baseline in this category.
    pub fn accepts_free_ranks(&self) -> bool {
        !matches!(self, Self::Background)
    }

    /// Whether values in this category feed the card rank average.
    pub fn counts_toward_card_rank(&self) -> bool {
        !matches!(self, Self::Background)
    }

    /// Rank-tier slots consumed by one skill of this category, if any.
    pub fn slot_weight(&self) -> Option<f64> {
        match self {
            Self::Secondary => Some(0.5),
            _ if self.is_standard() => Some(1.0),
            _ => None,
        }
    }

    /// The creation bucket this category's spend is charged to.
    pub fn bucket(&self) -> ExperienceBucket {
        match self {
            Self::Background => ExperienceBucket::Backgrounds,
            _ => ExperienceBucket::Skills,
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main1" => Ok(Self::Main1),
            "main2" => Ok(Self::Main2),
            "main3" => Ok(Self::Main3),
            "main4" => Ok(Self::Main4),
            "other1" => Ok(Self::Other1),
            "other2" => Ok(Self::Other2),
            "secondary" => Ok(Self::Secondary),
            "background" | "backgrounds" => Ok(Self::Background),
            other => Err(DomainError::parse(format!("Unknown skill category: {}", other))),
        }
    }
}

/// One of the three independent sub-budgets used by bucketed creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBucket {
    Attributes,
    Skills,
    Backgrounds,
}

impl ExperienceBucket {
    pub const ALL: [ExperienceBucket; 3] = [Self::Attributes, Self::Skills, Self::Backgrounds];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Skills => "skills",
            Self::Backgrounds => "backgrounds",
        }
    }

    /// Label shown in budget messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attributes => "Attributes",
            Self::Skills => "Skills",
            Self::Backgrounds => "Backgrounds",
        }
    }
}

impl fmt::Display for ExperienceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Experience cost formula for a priced entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingRule {
    /// cost(v) = v(v+1)/2
    Triangular,
    /// cost(v) = v(v+1)/4, fractional results are kept
    HalfTriangular,
    /// cost(v) = v * per_rank
    Linear { per_rank: f64 },
}

impl PricingRule {
    /// Nominal experience worth of owning `rank` ranks from zero.
    ///
    /// Ranks at or below zero are worth nothing.
    pub fn cost_to_rank(&self, rank: i32) -> f64 {
        self.nominal(i64::from(rank))
    }

    /// Experience charged for raising a trait from `baseline` to `current`.
    ///
    /// Zero when the current value is 0 or does not exceed the baseline.
    /// Takes `i64` so a baseline lifted by bonuses never overflows.
    pub fn cost_between(&self, baseline: i64, current: i64) -> f64 {
        if current == 0 || current <= baseline {
            return 0.0;
        }
        match self {
            Self::Linear { per_rank } => (current - baseline) as f64 * per_rank,
            _ => self.nominal(current) - self.nominal(baseline),
        }
    }

    fn nominal(&self, rank: i64) -> f64 {
        if rank <= 0 {
            return 0.0;
        }
        let v = rank as f64;
        match self {
            Self::Triangular => triangular(v),
            Self::HalfTriangular => triangular(v) / 2.0,
            Self::Linear { per_rank } => v * per_rank,
        }
    }
}

fn triangular(v: f64) -> f64 {
    v * (v + 1.0) / 2.0
}
