//! Creation budget validation.
//!
//! Compares what a character in creation has consumed against the budgets of
//! the active creation mode. The validator reports; it never refuses. Only
//! `overspent` entries block a normal finalize, and the caller may override.

use serde::{Deserialize, Serialize};

use super::ledger::SpentLedger;
use crate::entities::{CharacterSnapshot, PricedEntity};
use crate::value_objects::{
    CreationConfig, CreationMode, DistributionMode, ExperienceBucket, ProgressionSettings,
    SkillCategory, RANK_TIERS,
};

/// Current/max pair for one budget, for progress bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGauge {
    /// Stable key, e.g. `xp`, `xp.skills`, `ranks.tier3`
    pub key: String,
    pub label: String,
    pub current: f64,
    pub max: f64,
}

impl BudgetGauge {
    fn new(key: impl Into<String>, label: impl Into<String>, current: f64, max: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            current,
            max,
        }
    }
}

/// Validator output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    /// Unspent budget. Informational, never blocking.
    pub warnings: Vec<String>,
    /// Overspent budgets and out-of-bound attributes.
    pub overspent: Vec<String>,
    pub gauges: Vec<BudgetGauge>,
}

impl BudgetReport {
    /// True when nothing is overspent.
    pub fn is_ready(&self) -> bool {
        self.overspent.is_empty()
    }

    /// Record consumption against one budget; silent when exactly spent.
    fn compare(&mut self, label: &str, unit: &str, used: f64, budget: f64) {
        let difference = budget - used;
        if difference < 0.0 {
            self.overspent.push(format!(
                "{}: overspent by {} {}",
                label,
                fmt_amount(-difference),
                unit
            ));
        } else if difference > 0.0 {
            self.warnings
                .push(format!("{}: {} {} remaining", label, fmt_amount(difference), unit));
        }
    }
}

/// Validate a character in creation against the active creation mode.
///
/// Attribute bounds are checked in every mode.
pub fn validate_creation(
    ledger: &SpentLedger,
    snapshot: &CharacterSnapshot,
    settings: &ProgressionSettings,
) -> BudgetReport {
    let creation = &settings.creation;
    let attributes = snapshot.all_attributes(settings.secondary_attributes_enabled);
    let mut report = BudgetReport::default();

    match (creation.mode, creation.distribution) {
        (CreationMode::Points, DistributionMode::Global) => {
            check_global(&mut report, ledger, creation);
        }
        (CreationMode::Points, DistributionMode::Buckets) => {
            check_buckets(&mut report, ledger, creation);
        }
        (CreationMode::Ranks, _) => {
            check_pools(&mut report, snapshot, &attributes, creation);
            check_rank_slots(&mut report, snapshot, creation);
        }
    }

    check_attribute_bounds(&mut report, &attributes, creation);
    report
}

fn check_global(report: &mut BudgetReport, ledger: &SpentLedger, creation: &CreationConfig) {
    let budget = f64::from(creation.starting_xp);
    report.gauges.push(BudgetGauge::new("xp", "Experience", ledger.total, budget));
    report.compare("Experience", "XP", ledger.total, budget);
}

fn check_buckets(report: &mut BudgetReport, ledger: &SpentLedger, creation: &CreationConfig) {
    for bucket in ExperienceBucket::ALL {
        let budget = f64::from(match bucket {
            ExperienceBucket::Attributes => creation.attribute_xp,
            ExperienceBucket::Skills => creation.skill_xp,
            ExperienceBucket::Backgrounds => creation.background_xp,
        });
        let used = ledger.per_bucket.get(bucket);
        report.gauges.push(BudgetGauge::new(
            format!("xp.{}", bucket.as_str()),
            bucket.label(),
            used,
            budget,
        ));
        report.compare(bucket.label(), "XP", used, budget);
    }
}

fn check_pools(
    report: &mut BudgetReport,
    snapshot: &CharacterSnapshot,
    attributes: &[&PricedEntity],
    creation: &CreationConfig,
) {
    let attribute_sum: i64 = attributes.iter().map(|a| i64::from(a.current())).sum();
    let background_sum: i64 = snapshot
        .skills_in(SkillCategory::Background)
        .iter()
        .map(|b| i64::from(b.current()))
        .sum();

    let pools = [
        (ExperienceBucket::Attributes, attribute_sum, creation.attribute_points),
        (ExperienceBucket::Backgrounds, background_sum, creation.background_points),
    ];
    for (bucket, used, budget) in pools {
        let (used, budget) = (used as f64, f64::from(budget));
        report.gauges.push(BudgetGauge::new(
            format!("ranks.{}", bucket.as_str()),
            bucket.label(),
            used,
            budget,
        ));
        report.compare(bucket.label(), "points", used, budget);
    }
}

/// Slots consumed per rank tier: 1 per standard skill, 0.5 per secondary
/// skill, counted at the skill's exact current value.
pub fn rank_slot_usage(snapshot: &CharacterSnapshot) -> [f64; RANK_TIERS] {
    let mut usage = [0.0; RANK_TIERS];
    for (category, skill) in snapshot.skill_entries() {
        let Some(weight) = category.slot_weight() else {
            continue;
        };
        let tier = skill.current();
        if let Some(slot) = usize::try_from(tier)
            .ok()
            .and_then(|t| t.checked_sub(1))
            .and_then(|idx| usage.get_mut(idx))
        {
            *slot += weight;
        }
    }
    usage
}

fn check_rank_slots(
    report: &mut BudgetReport,
    snapshot: &CharacterSnapshot,
    creation: &CreationConfig,
) {
    let usage = rank_slot_usage(snapshot);
    for (tier, used) in (1..).zip(usage) {
        let slots = creation.rank_slots.slots_for(tier);
        if slots == 0 {
            continue;
        }
        let label = format!("Rank {}", tier);
        let budget = f64::from(slots);
        report.gauges.push(BudgetGauge::new(
            format!("ranks.tier{}", tier),
            label.clone(),
            used,
            budget,
        ));
        report.compare(&label, "slots", used, budget);
    }
}

fn check_attribute_bounds(
    report: &mut BudgetReport,
    attributes: &[&PricedEntity],
    creation: &CreationConfig,
) {
    for attribute in attributes {
        let value = attribute.current();
        if value < creation.attribute_min {
            report.overspent.push(format!(
                "{} is {}, below the minimum of {}",
                attribute.name, value, creation.attribute_min
            ));
        } else if value > creation.attribute_max {
            report.overspent.push(format!(
                "{} is {}, above the maximum of {}",
                attribute.name, value, creation.attribute_max
            ));
        }
    }
}

/// Formats an amount without a trailing `.0` for whole numbers.
fn fmt_amount(amount: f64) -> String {
    format!("{}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AttributeGroup;
    use crate::progression::ledger::BucketTotals;

    fn ledger(attributes: f64, skills: f64, backgrounds: f64) -> SpentLedger {
        let per_bucket = BucketTotals {
            attributes,
            skills,
            backgrounds,
        };
        SpentLedger {
            total: per_bucket.sum(),
            per_bucket,
            equivalent_value: 0.0,
        }
    }

    fn settings(mode: CreationMode, distribution: DistributionMode) -> ProgressionSettings {
        let mut settings = ProgressionSettings::default();
        settings.creation.active = true;
        settings.creation.mode = mode;
        settings.creation.distribution = distribution;
        settings
    }

    fn attributes(values: &[(&str, i32)]) -> CharacterSnapshot {
        CharacterSnapshot::new().with_attribute_group(AttributeGroup::new(
            "Physique",
            values
                .iter()
                .map(|(name, value)| PricedEntity::new(*name, *value))
                .collect(),
        ))
    }

    /// Validate a ledger against an empty snapshot.
    fn validate_ledger(spent: &SpentLedger, settings: &ProgressionSettings) -> BudgetReport {
        validate_creation(spent, &CharacterSnapshot::new(), settings)
    }

    #[test]
    fn global_exactly_spent_is_clean() {
        let settings = settings(CreationMode::Points, DistributionMode::Global);
        let report = validate_ledger(&ledger(50.0, 250.0, 50.0), &settings);
        assert!(report.warnings.is_empty());
        assert!(report.overspent.is_empty());
        assert!(report.is_ready());
        assert_eq!(report.gauges.len(), 1);
        assert_eq!(report.gauges[0].current, 350.0);
        assert_eq!(report.gauges[0].max, 350.0);
    }

    #[test]
    fn global_overspent_by_one() {
        let settings = settings(CreationMode::Points, DistributionMode::Global);
        let report = validate_ledger(&ledger(51.0, 250.0, 50.0), &settings);
        assert_eq!(report.overspent, vec!["Experience: overspent by 1 XP".to_string()]);
        assert!(report.warnings.is_empty());
        assert!(!report.is_ready());
    }

    #[test]
    fn global_remaining_is_warning_only() {
        let settings = settings(CreationMode::Points, DistributionMode::Global);
        let report = validate_ledger(&ledger(0.0, 100.5, 0.0), &settings);
        assert_eq!(report.warnings, vec!["Experience: 249.5 XP remaining".to_string()]);
        assert!(report.is_ready());
    }

    #[test]
    fn buckets_are_independent() {
        let mut settings = settings(CreationMode::Points, DistributionMode::Buckets);
        settings.creation.attribute_xp = 100;
        settings.creation.skill_xp = 200;
        settings.creation.background_xp = 40;
        let report = validate_ledger(&ledger(130.0, 150.0, 40.0), &settings);
        assert_eq!(report.overspent, vec!["Attributes: overspent by 30 XP".to_string()]);
        assert_eq!(report.warnings, vec!["Skills: 50 XP remaining".to_string()]);
        let keys: Vec<&str> = report.gauges.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["xp.attributes", "xp.skills", "xp.backgrounds"]);
        assert_eq!(report.gauges[1].current, 150.0);
    }

    #[test]
    fn secondary_skills_take_half_a_slot() {
        let mut settings = settings(CreationMode::Ranks, DistributionMode::Global);
        settings.creation.rank_slots = crate::value_objects::RankSlotTable::new([0, 0, 2, 0, 0]);
        settings.creation.attribute_points = 0;
        settings.creation.background_points = 0;
        let snapshot = CharacterSnapshot::new()
            .with_skill(SkillCategory::Secondary, PricedEntity::new("Cuisine", 3))
            .with_skill(SkillCategory::Secondary, PricedEntity::new("Danse", 3))
            .with_skill(SkillCategory::Main1, PricedEntity::new("Escrime", 3));
        assert_eq!(rank_slot_usage(&snapshot), [0.0, 0.0, 2.0, 0.0, 0.0]);

        let report = validate_creation(&SpentLedger::default(), &snapshot, &settings);
        assert!(report.is_ready());
        assert!(report.warnings.is_empty());
        let tier3 = report
            .gauges
            .iter()
            .find(|g| g.key == "ranks.tier3")
            .expect("tier 3 gauge");
        assert_eq!(tier3.current, 2.0);
    }

    #[test]
    fn two_secondaries_fill_one_slot() {
        let snapshot = CharacterSnapshot::new()
            .with_skill(SkillCategory::Secondary, PricedEntity::new("Cuisine", 3))
            .with_skill(SkillCategory::Secondary, PricedEntity::new("Danse", 3));
        assert_eq!(rank_slot_usage(&snapshot)[2], 1.0);
    }

    #[test]
    fn backgrounds_and_out_of_range_ranks_use_no_slots() {
        let snapshot = CharacterSnapshot::new()
            .with_skill(SkillCategory::Background, PricedEntity::new("Noblesse", 2))
            .with_skill(SkillCategory::Main1, PricedEntity::new("Escrime", 6))
            .with_skill(SkillCategory::Main2, PricedEntity::new("Tir", 0));
        assert_eq!(rank_slot_usage(&snapshot), [0.0; RANK_TIERS]);
    }

    #[test]
    fn ranks_mode_checks_pools_and_tiers() {
        let mut settings = settings(CreationMode::Ranks, DistributionMode::Global);
        settings.creation.rank_slots = crate::value_objects::RankSlotTable::new([1, 1, 0, 0, 0]);
        settings.creation.attribute_points = 4;
        settings.creation.background_points = 2;
        let snapshot = attributes(&[("Force", 3), ("Agilité", 2)])
            .with_skill(SkillCategory::Background, PricedEntity::new("Noblesse", 1))
            .with_skill(SkillCategory::Main1, PricedEntity::new("Escrime", 2))
            .with_skill(SkillCategory::Main2, PricedEntity::new("Tir", 2));

        let report = validate_creation(&SpentLedger::default(), &snapshot, &settings);
        assert_eq!(
            report.overspent,
            vec![
                "Attributes: overspent by 1 points".to_string(),
                "Rank 2: overspent by 1 slots".to_string(),
            ]
        );
        assert_eq!(
            report.warnings,
            vec![
                "Backgrounds: 1 points remaining".to_string(),
                "Rank 1: 1 slots remaining".to_string(),
            ]
        );
        // tiers 3-5 have no slots and are skipped
        assert!(report.gauges.iter().all(|g| g.key != "ranks.tier3"));
    }

    #[test]
    fn top_tier_slots_are_checked() {
        let mut settings = settings(CreationMode::Ranks, DistributionMode::Global);
        settings.creation.rank_slots = crate::value_objects::RankSlotTable::new([0, 0, 0, 0, 1]);
        settings.creation.attribute_points = 0;
        settings.creation.background_points = 0;
        let snapshot = CharacterSnapshot::new()
            .with_skill(SkillCategory::Main1, PricedEntity::new("Escrime", 5));

        let report = validate_creation(&SpentLedger::default(), &snapshot, &settings);
        assert!(report.is_ready());
        let tier = report
            .gauges
            .iter()
            .find(|g| g.key == "ranks.tier5")
            .expect("tier 5 gauge");
        assert_eq!((tier.current, tier.max), (1.0, 1.0));
        assert!(report.gauges.iter().all(|g| g.key != "ranks.tier1"));
    }

    #[test]
    fn attribute_bounds_checked_in_every_mode() {
        let snapshot = attributes(&[("Force", -3), ("Agilité", 6), ("Esprit", 0)]);
        for (mode, distribution) in [
            (CreationMode::Points, DistributionMode::Global),
            (CreationMode::Points, DistributionMode::Buckets),
            (CreationMode::Ranks, DistributionMode::Global),
        ] {
            let settings = settings(mode, distribution);
            let report = validate_creation(&SpentLedger::default(), &snapshot, &settings);
            assert!(report
                .overspent
                .contains(&"Force is -3, below the minimum of -2".to_string()));
            assert!(report
                .overspent
                .contains(&"Agilité is 6, above the maximum of 5".to_string()));
            assert!(!report.overspent.iter().any(|m| m.starts_with("Esprit")));
        }
    }

    #[test]
    fn secondary_attribute_bounds_only_when_enabled() {
        let snapshot =
            CharacterSnapshot::new().with_secondary_attribute(PricedEntity::new("Chance", 9));
        let mut settings = settings(CreationMode::Points, DistributionMode::Global);
        settings.creation.starting_xp = 0;
        assert!(validate_creation(&SpentLedger::default(), &snapshot, &settings).is_ready());
        settings.secondary_attributes_enabled = true;
        assert!(!validate_creation(&SpentLedger::default(), &snapshot, &settings).is_ready());
    }
}
