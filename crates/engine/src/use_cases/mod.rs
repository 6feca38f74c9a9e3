//! Use cases - user story orchestration.
//!
//! Use cases coordinate the pure domain rules with the settings port and own
//! the diagnostics around each evaluation.

pub mod progression;

pub use progression::{
    evaluate_with, FinalizeMode, FinalizeOutcome, ProgressionError, ProgressionReport,
    ProgressionUseCases,
};
