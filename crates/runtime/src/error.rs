//! Runtime error type.
//!
//! One enum for everything the service surface can reject. Core errors
//! pass through transparently so callers can still match on the precise
//! combat or progression failure.

use arena_content::ItemId;
use arena_core::{CombatantError, ProgressionError, RoundError};

use crate::repository::RepositoryError;

/// Errors surfaced by the arena service and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("no gladiator registered for this player")]
    UnknownGladiator,

    #[error("a gladiator already exists for this player")]
    GladiatorExists,

    #[error("unknown race: {0}")]
    UnknownRace(String),

    #[error("unknown enemy: {0}")]
    UnknownEnemy(String),

    #[error("enemy '{name}' requires level {required}")]
    EnemyLocked { name: String, required: u32 },

    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    #[error("item {0} is not owned")]
    ItemNotOwned(ItemId),

    #[error("item {0} is already owned")]
    ItemAlreadyOwned(ItemId),

    #[error("item {item} belongs in slot {expected}, not {requested}")]
    SlotMismatch {
        item: ItemId,
        expected: arena_content::EquipmentSlot,
        requested: arena_content::EquipmentSlot,
    },

    #[error("item {item} requires level {required}")]
    ItemLevelRequirement { item: ItemId, required: u32 },

    #[error("nothing equipped in slot {0}")]
    SlotEmpty(arena_content::EquipmentSlot),

    #[error("no stat points allocated")]
    EmptyAllocation,

    #[error("a fight is already in progress for this player")]
    FightInProgress,

    #[error("no active fight for this player")]
    NoActiveFight,

    #[error("the fight has not been decided yet")]
    FightUndecided,

    #[error("session registry lock poisoned")]
    RegistryPoisoned,

    #[error(transparent)]
    Combatant(#[from] CombatantError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
