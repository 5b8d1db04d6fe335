//! Stat model for combatants.
//!
//! Stats are layered in a fixed order, computed front to back:
//!
//! ```text
//! [ Base Attributes ]
//!      ↓  racial percentage modifiers (applied once, at creation)
//! [ Starting Attributes ]
//!      ↓  additive equipment bonuses (applied at query time, never stored)
//! [ Effective Attributes ]
//!      ↓
//! [ Combatant ]  (derived max health + live health)
//! ```
//!
//! Only base attributes and live health are ever persisted; everything
//! downstream is recomputed whenever it is needed.

pub mod attributes;
pub mod combatant;

pub use attributes::{Attributes, RacialModifiers, StatBonuses, max_health_for};
pub use combatant::{Combatant, CombatantError, Origin};
