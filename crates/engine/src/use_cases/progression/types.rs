//! Result types for progression use cases.

use serde::{Deserialize, Serialize};
use xpledger_domain::{
    AttributeTotal, BudgetReport, CharacterSnapshot, ExperienceSummary, SpentLedger,
};

/// Everything the sheet displays about experience, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionReport {
    pub summary: ExperienceSummary,
    pub ledger: SpentLedger,
    /// Attribute values with their trait bonuses, in sheet order
    pub attributes: Vec<AttributeTotal>,
    /// Present only while character creation is active
    pub creation: Option<BudgetReport>,
    /// True when creation is inactive or nothing is overspent
    pub ready_to_finalize: bool,
    /// None when the card rank feature is disabled
    pub card_rank: Option<String>,
    /// Acquired trait names with no catalog entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched_traits: Vec<String>,
}

/// How to treat an overspent budget when finalizing creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalizeMode {
    /// Refuse while anything is overspent
    #[default]
    Confirm,
    /// Finalize anyway
    Override,
}

/// Result of finalizing character creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeOutcome {
    /// Copy of the input with every baseline moved up to its current value
    pub snapshot: CharacterSnapshot,
    /// Budget report as it stood before rebaselining
    pub report: BudgetReport,
    /// True when finalize went through despite an overspent report
    pub overridden: bool,
}
