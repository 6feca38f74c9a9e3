//! Trait catalog: named advantages and disadvantages with their effects.
//!
//! A character records acquired traits by name. The catalog is the only place
//! that knows what a trait actually does, so a trait renamed or removed from
//! the catalog simply stops doing anything.

use serde::{Deserialize, Serialize};

use crate::common::names_match;
use crate::error::DomainError;
use crate::ids::TraitId;

/// A numeric modifier granted by a catalog trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Added to total experience gained
    FlatExperience { amount: i32 },
    /// Added to an attribute's displayed total and to its free allowance
    AttributeBonus { attribute: String, amount: i32 },
    /// Floor below which a skill is never charged
    FreeSkillRank { skill: String, rank: i32 },
}

/// Advantage or disadvantage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    #[default]
    Advantage,
    Disadvantage,
}

/// A catalog entry for a narrative trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitCatalogEntry {
    #[serde(default)]
    pub id: TraitId,
    pub name: String,
    #[serde(default)]
    pub kind: TraitKind,
    /// Display-only cost label (e.g. "+2", "-1 / -3")
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl TraitCatalogEntry {
    pub fn new(name: impl Into<String>, kind: TraitKind) -> Self {
        Self {
            id: TraitId::new(),
            name: name.into(),
            kind,
            cost: String::new(),
            effects: Vec::new(),
        }
    }

    /// Builder-style: append an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// The full trait catalog, authored by the settings surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitCatalog {
    entries: Vec<TraitCatalogEntry>,
}

impl TraitCatalog {
    pub fn new(entries: Vec<TraitCatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a catalog document (a JSON array of entries).
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn entries(&self) -> &[TraitCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose name matches `name` after trimming and lowercasing.
    pub fn find(&self, name: &str) -> Option<&TraitCatalogEntry> {
        self.entries.iter().find(|e| names_match(&e.name, name))
    }
}

/// A trait recorded on the character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquiredTrait {
    pub name: String,
    /// Cost as written on the sheet (cosmetic)
    #[serde(default)]
    pub cost: String,
}

impl AcquiredTrait {
    pub fn new(name: impl Into<String>, cost: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost: cost.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TraitCatalog {
        TraitCatalog::new(vec![
            TraitCatalogEntry::new("Ambidextre", TraitKind::Advantage).with_effect(
                Effect::FreeSkillRank {
                    skill: "Escrime".into(),
                    rank: 2,
                },
            ),
            TraitCatalogEntry::new("Fragile", TraitKind::Disadvantage).with_effect(
                Effect::AttributeBonus {
                    attribute: "Constitution".into(),
                    amount: -1,
                },
            ),
        ])
    }

    #[test]
    fn find_is_case_insensitive_and_trimmed() {
        let catalog = catalog();
        assert!(catalog.find("  ambidextre ").is_some());
        assert!(catalog.find("FRAGILE").is_some());
        assert!(catalog.find("Colosse").is_none());
    }

    #[test]
    fn effects_use_tagged_json() {
        let json = r#"[
            {"name": "Riche", "cost": "+2", "effects": [{"type": "flat_experience", "amount": 10}]},
            {"name": "Costaud", "kind": "advantage", "effects": [
                {"type": "attribute_bonus", "attribute": "Force", "amount": 1}
            ]},
            {"name": "Boiteux", "kind": "disadvantage"}
        ]"#;
        let catalog = TraitCatalog::from_json(json).expect("valid catalog");
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.entries()[0].effects,
            vec![Effect::FlatExperience { amount: 10 }]
        );
        assert_eq!(catalog.entries()[2].kind, TraitKind::Disadvantage);
        assert!(catalog.entries()[2].effects.is_empty());
    }

    #[test]
    fn unknown_effect_type_is_parse_error() {
        let json = r#"[{"name": "X", "effects": [{"type": "teleport"}]}]"#;
        assert!(matches!(
            TraitCatalog::from_json(json),
            Err(DomainError::Parse(_))
        ));
    }
}
