//! Static game content and data-file loaders.
//!
//! This crate houses the built-in catalogs the arena ships with and the
//! RON loaders that let deployments override them:
//! - Races (percentage modifiers over the recruit baseline)
//! - Bestiary enemy templates
//! - The equipment item catalog
//!
//! Content is consumed by the runtime when it builds combatants; nothing
//! in here ever appears inside fight state, and the combat engine never
//! reads these tables itself.

pub mod enemies;
pub mod items;
pub mod races;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use enemies::{EnemyCatalog, EnemyTemplate};
pub use items::{
    EquipmentSlot, ItemCatalog, ItemDefinition, ItemId, ItemKind, Rarity, aggregate_bonuses,
};
pub use races::{RECRUIT_BASELINE, RaceCatalog, RaceDefinition};

#[cfg(feature = "loaders")]
pub use loaders::{EnemyLoader, ItemLoader, RaceLoader};
