//! Common utility functions shared across the domain and engine crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Lenient by contract** - sheet input is often mid-edit, so helpers
//!   degrade to a neutral default instead of failing

pub mod numeric;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use numeric::{parse_rank_or_zero, truncate_or_zero};
pub use string::{names_match, normalize_name};
