//! Progression and experience accounting.
//!
//! Everything here is a pure function of a
//! [`CharacterSnapshot`](crate::entities::CharacterSnapshot), the trait catalog
//! and [`ProgressionSettings`](crate::value_objects::ProgressionSettings).
//! Results are derived fresh on every call and never cached.
//!
//! Evaluation order:
//! 1. [`resolve_effects`] turns acquired traits into [`ActiveEffects`]
//! 2. [`compute_spent`] prices every skill, background and attribute
//! 3. [`validate_creation`] checks the result against creation budgets
//! 4. [`card_rank_for`] labels the character's best skills

mod budget;
mod card_rank;
mod effects;
mod ledger;

pub use budget::{rank_slot_usage, validate_creation, BudgetGauge, BudgetReport};
pub use card_rank::{
    best_skills_average, card_rank, card_rank_for, label_for_steps, steps_for_average, MAX_RANK,
    NO_RANK,
};
pub use effects::{resolve_effects, unmatched_traits, ActiveEffects};
pub use ledger::{
    attribute_spent, attribute_totals, compute_spent, effective_attribute_baseline,
    effective_skill_baseline, experience_gain, skill_spent, summarize, AttributeTotal,
    BucketTotals, ExperienceSummary, SpentLedger,
};
