//! Effect resolution: acquired traits -> active numeric modifiers.

use std::collections::HashMap;

use crate::common::normalize_name;
use crate::entities::{AcquiredTrait, Effect, TraitCatalog};

/// Effects granted by the acquired traits that match the catalog.
///
/// Output follows input order and keeps duplicates. Traits with no catalog
/// match contribute nothing.
pub fn resolve_effects<'a>(
    acquired: impl IntoIterator<Item = &'a AcquiredTrait>,
    catalog: &TraitCatalog,
) -> Vec<Effect> {
    acquired
        .into_iter()
        .filter_map(|t| catalog.find(&t.name))
        .flat_map(|entry| entry.effects.iter().cloned())
        .collect()
}

/// Acquired traits with no catalog entry (inert, but worth reporting).
pub fn unmatched_traits<'a>(
    acquired: impl IntoIterator<Item = &'a AcquiredTrait>,
    catalog: &TraitCatalog,
) -> Vec<&'a AcquiredTrait> {
    acquired
        .into_iter()
        .filter(|t| catalog.find(&t.name).is_none())
        .collect()
}

/// Resolved effects folded into lookup tables.
///
/// Flat experience and attribute bonuses add up. Free skill rank floors do
/// not: the highest floor granted for a skill wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveEffects {
    flat_experience: i64,
    attribute_bonuses: HashMap<String, i32>,
    free_rank_floors: HashMap<String, i32>,
    count: usize,
}

impl ActiveEffects {
    pub fn from_effects(effects: &[Effect]) -> Self {
        let mut active = Self {
            count: effects.len(),
            ..Self::default()
        };
        for effect in effects {
            match effect {
                Effect::FlatExperience { amount } => {
                    active.flat_experience =
                        active.flat_experience.saturating_add(i64::from(*amount));
                }
                Effect::AttributeBonus { attribute, amount } => {
                    active
                        .attribute_bonuses
                        .entry(normalize_name(attribute))
                        .and_modify(|bonus| *bonus = bonus.saturating_add(*amount))
                        .or_insert(*amount);
                }
                Effect::FreeSkillRank { skill, rank } => {
                    active
                        .free_rank_floors
                        .entry(normalize_name(skill))
                        .and_modify(|floor| *floor = (*floor).max(*rank))
                        .or_insert(*rank);
                }
            }
        }
        active
    }

    /// Total of all flat experience effects.
    pub fn flat_experience(&self) -> i64 {
        self.flat_experience
    }

    /// Summed bonus for an attribute, 0 when none applies.
    pub fn attribute_bonus(&self, attribute: &str) -> i32 {
        self.attribute_bonuses
            .get(&normalize_name(attribute))
            .copied()
            .unwrap_or(0)
    }

    /// Highest free rank floor for a skill, if any effect grants one.
    pub fn free_rank_floor(&self, skill: &str) -> Option<i32> {
        self.free_rank_floors.get(&normalize_name(skill)).copied()
    }

    /// Number of effects folded in, duplicates included.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
