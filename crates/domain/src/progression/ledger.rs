//! Progression ledger: experience already spent on a character.
//!
//! Each entity is priced from its effective baseline (creation baseline
//! lifted by matching effects) up to its current value, using the pricing
//! rule of its category. The ledger always produces a number.

use serde::{Deserialize, Serialize};

use super::effects::ActiveEffects;
use crate::entities::{CharacterSnapshot, PricedEntity};
use crate::ids::EntityId;
use crate::value_objects::{ExperienceBucket, PricingRule, ProgressionSettings, SkillCategory};

/// Spend per creation bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTotals {
    pub attributes: f64,
    pub skills: f64,
    pub backgrounds: f64,
}

impl BucketTotals {
    pub fn get(&self, bucket: ExperienceBucket) -> f64 {
        match bucket {
            ExperienceBucket::Attributes => self.attributes,
            ExperienceBucket::Skills => self.skills,
            ExperienceBucket::Backgrounds => self.backgrounds,
        }
    }

    pub fn add(&mut self, bucket: ExperienceBucket, amount: f64) {
        match bucket {
            ExperienceBucket::Attributes => self.attributes += amount,
            ExperienceBucket::Skills => self.skills += amount,
            ExperienceBucket::Backgrounds => self.backgrounds += amount,
        }
    }

    pub fn sum(&self) -> f64 {
        self.attributes + self.skills + self.backgrounds
    }
}

/// Output of [`compute_spent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpentLedger {
    /// All spend, every category
    pub total: f64,
    /// Same spend split into the three creation buckets
    pub per_bucket: BucketTotals,
    /// Nominal worth of every rank owned, free or paid. Reporting only.
    pub equivalent_value: f64,
}

/// Gain / spent / remaining, as displayed on the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSummary {
    pub gain: f64,
    pub spent: f64,
    pub remaining: f64,
    pub equivalent_value: f64,
}

/// Attribute value with its effect bonus, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeTotal {
    pub id: EntityId,
    pub name: String,
    pub value: i32,
    pub bonus: i32,
    pub total: i32,
}

/// Baseline a skill is priced from: the stored baseline, or a higher free
/// rank floor granted by an effect (not for backgrounds).
pub fn effective_skill_baseline(
    category: SkillCategory,
    skill: &PricedEntity,
    effects: &ActiveEffects,
) -> i32 {
    let stored = skill.creation_baseline();
    if !category.accepts_free_ranks() {
        return stored;
    }
    effects
        .free_rank_floor(&skill.name)
        .map_or(stored, |floor| stored.max(floor))
}

/// Baseline an attribute is priced from: stored baseline plus its bonus.
pub fn effective_attribute_baseline(attribute: &PricedEntity, effects: &ActiveEffects) -> i64 {
    i64::from(attribute.creation_baseline()) + i64::from(effects.attribute_bonus(&attribute.name))
}

/// Experience spent on one skill.
pub fn skill_spent(category: SkillCategory, skill: &PricedEntity, effects: &ActiveEffects) -> f64 {
    let baseline = effective_skill_baseline(category, skill, effects);
    category
        .pricing_rule()
        .cost_between(i64::from(baseline), i64::from(skill.current()))
}

/// Experience spent on one attribute.
pub fn attribute_spent(
    attribute: &PricedEntity,
    effects: &ActiveEffects,
    cost_per_point: i32,
) -> f64 {
    let baseline = effective_attribute_baseline(attribute, effects);
    attribute_rule(cost_per_point).cost_between(baseline, i64::from(attribute.current()))
}

fn attribute_rule(cost_per_point: i32) -> PricingRule {
    PricingRule::Linear {
        per_rank: f64::from(cost_per_point),
    }
}

/// Price every skill and attribute on the sheet.
pub fn compute_spent(
    snapshot: &CharacterSnapshot,
    effects: &ActiveEffects,
    settings: &ProgressionSettings,
) -> SpentLedger {
    let mut per_bucket = BucketTotals::default();
    let mut equivalent_value = 0.0;

    for (category, skill) in snapshot.skill_entries() {
        per_bucket.add(category.bucket(), skill_spent(category, skill, effects));
        equivalent_value += category.pricing_rule().cost_to_rank(skill.current());
    }

    let rule = attribute_rule(settings.attribute_cost_per_point);
    for attribute in snapshot.all_attributes(settings.secondary_attributes_enabled) {
        per_bucket.add(
            ExperienceBucket::Attributes,
            attribute_spent(attribute, effects, settings.attribute_cost_per_point),
        );
        equivalent_value += rule.cost_to_rank(attribute.current());
    }

    SpentLedger {
        total: per_bucket.sum(),
        per_bucket,
        equivalent_value,
    }
}

/// Total experience gained: logged grants plus flat experience effects.
pub fn experience_gain(snapshot: &CharacterSnapshot, effects: &ActiveEffects) -> f64 {
    snapshot
        .granted_experience()
        .saturating_add(effects.flat_experience()) as f64
}

/// Gain / spent / remaining triple for the sheet header.
pub fn summarize(
    snapshot: &CharacterSnapshot,
    effects: &ActiveEffects,
    ledger: &SpentLedger,
) -> ExperienceSummary {
    let gain = experience_gain(snapshot, effects);
    ExperienceSummary {
        gain,
        spent: ledger.total,
        remaining: gain - ledger.total,
        equivalent_value: ledger.equivalent_value,
    }
}

/// Displayed attribute totals (value + bonus) in sheet order.
pub fn attribute_totals(
    snapshot: &CharacterSnapshot,
    effects: &ActiveEffects,
    settings: &ProgressionSettings,
) -> Vec<AttributeTotal> {
    snapshot
        .all_attributes(settings.secondary_attributes_enabled)
        .into_iter()
        .map(|attribute| {
            let value = attribute.current();
            let bonus = effects.attribute_bonus(&attribute.name);
            AttributeTotal {
                id: attribute.id,
                name: attribute.name.clone(),
                value,
                bonus,
                total: value.saturating_add(bonus),
            }
        })
        .collect()
}
