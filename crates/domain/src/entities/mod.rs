//! Entities - the sheet data the progression engine reads.

mod character;
mod priced_entity;
mod trait_catalog;

pub use character::{AttributeGroup, CharacterSnapshot, ExperienceGrant};
pub use priced_entity::{PricedEntity, RawRank};
pub use trait_catalog::{AcquiredTrait, Effect, TraitCatalog, TraitCatalogEntry, TraitKind};
