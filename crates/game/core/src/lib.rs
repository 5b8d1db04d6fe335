//! Deterministic arena combat rules and progression model.
//!
//! `arena-core` defines the canonical fight rules (stat model, round
//! engine, stamina attrition) and the persistent progression curve, and
//! exposes pure APIs reusable by any outer layer. All per-fight mutation
//! flows through [`engine::CombatEngine`] against an
//! [`session::EncounterSession`]; all randomness flows through the
//! injectable [`rng::RngOracle`], so every fight is replayable from a
//! seed. The crate performs no I/O and holds no global state.

pub mod combat;
pub mod engine;
pub mod progression;
pub mod rng;
pub mod session;
pub mod stats;

pub use combat::{AttackOutcome, AttackResult, resolve_attack};
pub use engine::{CombatEngine, RoundError, RoundOutcome};
pub use progression::{ExperienceGain, Progression, ProgressionError, xp_to_next};
pub use rng::{PcgRng, RngOracle};
pub use session::{EncounterSession, SessionSnapshot, Winner};
pub use stats::{
    Attributes, Combatant, CombatantError, Origin, RacialModifiers, StatBonuses, max_health_for,
};
