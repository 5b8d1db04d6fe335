//! Combat resolution primitives.
//!
//! This module provides pure functions for resolving combat interactions.
//! All functions are deterministic given the injected RNG draws and have
//! no side effects; the round engine applies their results to the session.
//!
//! # Core Functions
//!
//! - `resolve_attack`: complete attack resolution (hit check + damage + crit)
//! - `first_strike_chance` / `player_strikes_first`: turn-order arbitration
//! - `hit_chance` / `check_hit`: weaponskill vs dodge
//! - `roll_damage` / `critical_damage`: strength-scaled damage
//! - `required_for_round` / `drain_for_round`: stamina exhaustion curve

pub mod damage;
pub mod hit;
pub mod initiative;
pub mod result;
pub mod stamina;

pub use damage::{critical_damage, roll_damage};
pub use hit::{check_hit, hit_chance};
pub use initiative::{first_strike_chance, player_strikes_first};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
pub use stamina::{drain_for_round, required_for_round};
