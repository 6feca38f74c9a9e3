//! XP Ledger Engine - orchestration around the progression domain rules.
//!
//! Reads settings through [`infrastructure::ports::ProgressionSettingsSource`],
//! runs the domain pipeline, and logs through `tracing`. No subscriber is
//! installed here; the embedding application owns that.

pub mod infrastructure;
pub mod use_cases;
