//! Card rank: a narrative tier label derived from a character's best skills.
//!
//! The average of the top N skills is measured in increments above a base
//! value. Each increment climbs one step of a court-card ladder: one to four
//! Valets, then Dames, then Rois.

use crate::entities::CharacterSnapshot;
use crate::value_objects::CardRankConfig;

/// Guards exact thresholds against binary floating-point rounding.
const EPSILON: f64 = 1e-9;

/// Label when no step has been crossed.
pub const NO_RANK: &str = "Aucune";

/// Steps 1 through 11. Step 12 and beyond is [`MAX_RANK`].
const LADDER: [&str; 11] = [
    "Un Valet",
    "Deux Valets",
    "Trois Valets",
    "Quatre Valets",
    "Une Dame",
    "Deux Dames",
    "Trois Dames",
    "Quatre Dames",
    "Un Roi",
    "Deux Rois",
    "Trois Rois",
];

/// Label once the ladder is exhausted.
pub const MAX_RANK: &str = "Quatre Rois (Max)";

/// Card rank for a set of skill values, or `None` when the feature is off.
///
/// Zero values are ignored. The best `best_skills_count` values are averaged,
/// with missing slots counted as 0.
pub fn card_rank(values: impl IntoIterator<Item = i32>, config: &CardRankConfig) -> Option<String> {
    if !config.enabled {
        return None;
    }
    let average = best_skills_average(values, config.best_skills_count);
    Some(label_for_steps(steps_for_average(average, config)).to_string())
}

/// Card rank for every non-background skill on the sheet.
pub fn card_rank_for(snapshot: &CharacterSnapshot, config: &CardRankConfig) -> Option<String> {
    let values = snapshot
        .skill_entries()
        .filter(|(category, _)| category.counts_toward_card_rank())
        .map(|(_, skill)| skill.current());
    card_rank(values, config)
}

/// Average of the top `count` non-zero values, padding with zeros.
pub fn best_skills_average(values: impl IntoIterator<Item = i32>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let mut ranked: Vec<i32> = values.into_iter().filter(|v| *v != 0).collect();
    ranked.sort_unstable_by(|a, b| b.cmp(a));
    let sum: i64 = ranked.iter().take(count).map(|v| i64::from(*v)).sum();
    sum as f64 / count as f64
}

/// Whole increments crossed above the base value.
pub fn steps_for_average(average: f64, config: &CardRankConfig) -> i64 {
    if !(config.increment.is_finite() && config.increment > 0.0) {
        return 0;
    }
    let steps = ((average - config.base_start + EPSILON) / config.increment).floor();
    if steps.is_finite() {
        steps as i64
    } else {
        0
    }
}

/// Ladder label for a step count.
pub fn label_for_steps(steps: i64) -> &'static str {
    if steps <= 0 {
        return NO_RANK;
    }
    usize::try_from(steps - 1)
        .ok()
        .and_then(|idx| LADDER.get(idx).copied())
        .unwrap_or(MAX_RANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> CardRankConfig {
        CardRankConfig {
            enabled: true,
            best_skills_count: 6,
            base_start: 2.0,
            increment: 0.5,
        }
    }

    #[test]
    fn disabled_feature_yields_none() {
        assert_eq!(card_rank(vec![5, 5, 5], &CardRankConfig::default()), None);
    }

    #[test]
    fn exact_threshold_crosses_first_step() {
        // average 2.5
        let label = card_rank(vec![3, 3, 3, 2, 2, 2], &enabled());
        assert_eq!(label.as_deref(), Some("Un Valet"));
    }

    #[test]
    fn average_at_base_is_no_rank() {
        let label = card_rank(vec![2, 2, 2, 2, 2, 2], &enabled());
        assert_eq!(label.as_deref(), Some(NO_RANK));
    }

    #[test]
    fn missing_slots_pad_with_zero() {
        // (6 + 6 + 3) / 6 = 2.5
        assert_eq!(best_skills_average(vec![6, 0, 6, 3], 6), 2.5);
        assert_eq!(card_rank(vec![6, 6, 3], &enabled()).as_deref(), Some("Un Valet"));
    }

    #[test]
    fn only_top_values_count() {
        assert_eq!(best_skills_average(vec![1, 5, 1, 5, 5], 3), 5.0);
    }

    #[test]
    fn ladder_climbs_through_court_cards() {
        assert_eq!(label_for_steps(4), "Quatre Valets");
        assert_eq!(label_for_steps(5), "Une Dame");
        assert_eq!(label_for_steps(9), "Un Roi");
        assert_eq!(label_for_steps(11), "Trois Rois");
    }

    #[test]
    fn ladder_saturates_at_top() {
        assert_eq!(label_for_steps(12), MAX_RANK);
        assert_eq!(label_for_steps(40), MAX_RANK);
        let mut config = enabled();
        config.increment = 0.2;
        // average 4.5 -> 12.5 steps
        let label = card_rank(vec![5, 5, 5, 4, 4, 4], &config);
        assert_eq!(label.as_deref(), Some(MAX_RANK));
    }

    #[test]
    fn zero_count_is_no_rank() {
        let mut config = enabled();
        config.best_skills_count = 0;
        assert_eq!(card_rank(vec![5, 5], &config).as_deref(), Some(NO_RANK));
    }

    #[test]
    fn non_positive_increment_is_no_rank() {
        let mut config = enabled();
        config.increment = 0.0;
        assert_eq!(card_rank(vec![5, 5], &config).as_deref(), Some(NO_RANK));
    }
}
