//! Character snapshot - the read-only input to every progression computation.
//!
//! The sheet editor builds a fresh snapshot on every change. Nothing in this
//! crate mutates one; operations that "change" a snapshot return a new one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::priced_entity::{PricedEntity, RawRank};
use super::trait_catalog::AcquiredTrait;
use crate::ids::CharacterId;
use crate::value_objects::SkillCategory;

/// A named group of attributes (e.g. "Physique", "Mental").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroup {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<PricedEntity>,
}

impl AttributeGroup {
    pub fn new(name: impl Into<String>, attributes: Vec<PricedEntity>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// A flat experience grant logged on the sheet (session reward, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceGrant {
    #[serde(default)]
    pub amount: RawRank,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ExperienceGrant {
    pub fn new(amount: impl Into<RawRank>) -> Self {
        Self {
            amount: amount.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Everything the progression engine reads from one character sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    #[serde(default)]
    pub id: CharacterId,
    /// Skills grouped by the eight fixed columns
    #[serde(default)]
    pub skills: BTreeMap<SkillCategory, Vec<PricedEntity>>,
    #[serde(default)]
    pub attributes: Vec<AttributeGroup>,
    /// Optional parallel attribute set, priced only when enabled in settings
    #[serde(default)]
    pub secondary_attributes: Vec<PricedEntity>,
    #[serde(default)]
    pub advantages: Vec<AcquiredTrait>,
    #[serde(default)]
    pub disadvantages: Vec<AcquiredTrait>,
    #[serde(default)]
    pub experience_grants: Vec<ExperienceGrant>,
}

impl CharacterSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Builder-style methods
    // ──────────────────────────────────────────────────────────────────────────

    pub fn with_skill(mut self, category: SkillCategory, skill: PricedEntity) -> Self {
        self.skills.entry(category).or_default().push(skill);
        self
    }

    pub fn with_attribute_group(mut self, group: AttributeGroup) -> Self {
        self.attributes.push(group);
        self
    }

    pub fn with_secondary_attribute(mut self, attribute: PricedEntity) -> Self {
        self.secondary_attributes.push(attribute);
        self
    }

    pub fn with_advantage(mut self, acquired: AcquiredTrait) -> Self {
        self.advantages.push(acquired);
        self
    }

    pub fn with_disadvantage(mut self, acquired: AcquiredTrait) -> Self {
        self.disadvantages.push(acquired);
        self
    }

    pub fn with_grant(mut self, grant: ExperienceGrant) -> Self {
        self.experience_grants.push(grant);
        self
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    /// Skills in one column. Missing columns are empty.
    pub fn skills_in(&self, category: SkillCategory) -> &[PricedEntity] {
        self.skills.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every skill with its column, in column order then sheet order.
    pub fn skill_entries(&self) -> impl Iterator<Item = (SkillCategory, &PricedEntity)> {
        self.skills
            .iter()
            .flat_map(|(category, skills)| skills.iter().map(move |s| (*category, s)))
    }

    /// Primary attributes in group order, followed by the secondary set when
    /// `include_secondary` is true.
    pub fn all_attributes(&self, include_secondary: bool) -> Vec<&PricedEntity> {
        let primary = self.attributes.iter().flat_map(|g| g.attributes.iter());
        if include_secondary {
            primary.chain(self.secondary_attributes.iter()).collect()
        } else {
            primary.collect()
        }
    }

    /// Advantages then disadvantages, in sheet order.
    pub fn acquired_traits(&self) -> impl Iterator<Item = &AcquiredTrait> {
        self.advantages.iter().chain(self.disadvantages.iter())
    }

    /// Sum of logged experience grants. Malformed amounts count as 0.
    pub fn granted_experience(&self) -> i64 {
        self.experience_grants
            .iter()
            .fold(0i64, |total, g| total.saturating_add(i64::from(g.amount.value())))
    }

    /// A copy where every entity's baseline equals its current value.
    ///
    /// This is the only bulk rebaselining operation; it is what finalizing
    /// character creation means.
    pub fn rebaselined(&self) -> Self {
        Self {
            skills: self
                .skills
                .iter()
                .map(|(category, skills)| {
                    (*category, skills.iter().map(PricedEntity::rebaselined).collect())
                })
                .collect(),
            attributes: self
                .attributes
                .iter()
                .map(|group| AttributeGroup {
                    name: group.name.clone(),
                    attributes: group.attributes.iter().map(PricedEntity::rebaselined).collect(),
                })
                .collect(),
            secondary_attributes: self
                .secondary_attributes
                .iter()
                .map(PricedEntity::rebaselined)
                .collect(),
            ..self.clone()
        }
    }
}
