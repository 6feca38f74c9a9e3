//! Priced entities - any sheet trait with a numeric rank.
//!
//! Skills, secondary skills, background traits, and attributes all share this
//! shape: a current value the player sees, and a creation baseline below which
//! ranks were acquired for free.

use serde::{Deserialize, Serialize};

use crate::common::{parse_rank_or_zero, truncate_or_zero};
use crate::ids::EntityId;

/// A rank exactly as the sheet editor stored it.
///
/// The editor may hold a number or, mid-edit, arbitrary text. Reading the
/// rank with [`RawRank::value`] never fails: malformed input is worth 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRank {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl RawRank {
    /// The rank as an integer, 0 when the stored value is not a number.
    pub fn value(&self) -> i32 {
        match self {
            Self::Integer(v) => i32::try_from(*v).unwrap_or(0),
            Self::Decimal(v) => truncate_or_zero(*v),
            Self::Text(s) => parse_rank_or_zero(s),
        }
    }
}

impl Default for RawRank {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i32> for RawRank {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for RawRank {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A trait with a rank: skill, background, or attribute.
///
/// This struct uses public fields because it is a plain snapshot of what the
/// sheet editor holds. The baseline invariant (0 <= baseline <= value) is
/// maintained by the editor, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedEntity {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    /// Player-visible rank
    #[serde(default)]
    pub value: RawRank,
    /// Rank acquired for free during creation
    #[serde(default)]
    pub baseline: RawRank,
}

impl PricedEntity {
    pub fn new(name: impl Into<String>, value: impl Into<RawRank>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            value: value.into(),
            baseline: RawRank::default(),
        }
    }

    /// Builder-style: set the creation baseline.
    pub fn with_baseline(mut self, baseline: impl Into<RawRank>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Current rank, 0 when malformed.
    pub fn current(&self) -> i32 {
        self.value.value()
    }

    /// Stored creation baseline, 0 when malformed.
    pub fn creation_baseline(&self) -> i32 {
        self.baseline.value()
    }

    /// A copy whose baseline equals its current value.
    ///
    /// Used when creation is finalized: everything owned becomes free.
    pub fn rebaselined(&self) -> Self {
        let current = self.current();
        Self {
            value: RawRank::from(current),
            baseline: RawRank::from(current),
            ..self.clone()
        }
    }
}
