//! The combatant value type.
//!
//! Player gladiators and bestiary enemies are the same data at fight time;
//! the engine treats both identically, so a single value type with an
//! [`Origin`] tag replaces any player/enemy type split. A `Combatant` is
//! expected to already reflect racial and equipment modifiers: the engine
//! never looks up race or item tables itself.

use super::attributes::{Attributes, max_health_for};

/// Where a combatant came from. Display/bookkeeping only; the combat
/// engine never branches on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// A player-controlled gladiator.
    #[default]
    Gladiator,
    /// A fixed bestiary template.
    Enemy,
}

/// Errors rejected at combatant construction time.
///
/// Bad inputs are caught here, before a fight starts, never mid-round.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantError {
    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("attribute {stat} must not be negative (got {value})")]
    NegativeStat { stat: &'static str, value: i32 },
}

/// A participant in a fight: derived attributes plus live health.
///
/// # Invariants
///
/// - `current_health <= max_health` always.
/// - `max_health == 1 + floor(vitality * 1.5)` for the current vitality.
/// - Health may go negative from damage; "alive" means `current_health > 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    archetype: String,
    origin: Origin,
    attributes: Attributes,
    max_health: i32,
    current_health: i32,
}

impl Combatant {
    /// Create a combatant at full health.
    ///
    /// `archetype` is the race or template tag, used only for display and
    /// bonus lookup by outer layers. Rejects empty names and negative
    /// attributes.
    pub fn new(
        name: impl Into<String>,
        archetype: impl Into<String>,
        origin: Origin,
        attributes: Attributes,
    ) -> Result<Self, CombatantError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CombatantError::EmptyName);
        }
        if let Some((stat, value)) = attributes.has_negative() {
            return Err(CombatantError::NegativeStat { stat, value });
        }

        let max_health = max_health_for(attributes.vitality);
        Ok(Self {
            name,
            archetype: archetype.into(),
            origin,
            attributes,
            max_health,
            current_health: max_health,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> &str {
        &self.archetype
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    /// Alive check: health above zero. The health field itself is allowed
    /// to sit at or below zero after a killing blow.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Subtract damage from current health and return the amount applied.
    ///
    /// Health is not floored at zero; the alive predicate handles that.
    pub fn take_damage(&mut self, damage: i32) -> i32 {
        self.current_health -= damage;
        damage
    }

    /// Restore health, clamped to max.
    pub fn heal(&mut self, amount: i32) {
        self.current_health = (self.current_health + amount).min(self.max_health);
    }

    /// Set current health directly, clamped to max.
    ///
    /// Used by outer layers restoring persisted health between fights.
    pub fn set_current_health(&mut self, health: i32) {
        self.current_health = health.min(self.max_health);
    }

    /// Raise vitality and carry the max-health delta into current health.
    ///
    /// The absolute missing-health gap is preserved: current health rises
    /// by exactly the max-health increase, never falls.
    pub fn raise_vitality(&mut self, delta: i32) {
        if delta <= 0 {
            return;
        }
        let old_max = self.max_health;
        self.attributes.vitality += delta;
        self.max_health = max_health_for(self.attributes.vitality);
        self.current_health += self.max_health - old_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> Attributes {
        Attributes::new(10, 8, 9, 5, 66, 50)
    }

    #[test]
    fn starts_at_full_health() {
        let c = Combatant::new("Ragnar", "Human", Origin::Gladiator, attrs()).unwrap();
        assert_eq!(c.max_health(), 100);
        assert_eq!(c.current_health(), 100);
        assert!(c.is_alive());
    }

    #[test]
    fn empty_name_rejected() {
        let err = Combatant::new("  ", "Human", Origin::Gladiator, attrs()).unwrap_err();
        assert_eq!(err, CombatantError::EmptyName);
    }

    #[test]
    fn negative_stat_rejected_at_construction() {
        let mut bad = attrs();
        bad.dodge = -1;
        let err = Combatant::new("Ragnar", "Human", Origin::Gladiator, bad).unwrap_err();
        assert_eq!(
            err,
            CombatantError::NegativeStat {
                stat: "dodge",
                value: -1
            }
        );
    }

    #[test]
    fn health_may_go_negative_but_alive_flips_at_zero() {
        let mut c = Combatant::new("Ragnar", "Human", Origin::Gladiator, attrs()).unwrap();
        c.take_damage(99);
        assert!(c.is_alive());
        c.take_damage(5);
        assert_eq!(c.current_health(), -4);
        assert!(!c.is_alive());
    }

    #[test]
    fn heal_clamps_to_max() {
        let mut c = Combatant::new("Ragnar", "Human", Origin::Gladiator, attrs()).unwrap();
        c.take_damage(30);
        c.heal(1000);
        assert_eq!(c.current_health(), c.max_health());
    }

    #[test]
    fn raise_vitality_preserves_missing_health_gap() {
        let mut c = Combatant::new("Ragnar", "Human", Origin::Gladiator, attrs()).unwrap();
        c.take_damage(40); // 60 / 100, gap of 40
        c.raise_vitality(4); // vitality 70 -> max 106
        assert_eq!(c.max_health(), 106);
        assert_eq!(c.current_health(), 66);
        assert_eq!(c.max_health() - c.current_health(), 40);
    }

    #[test]
    fn current_health_never_exceeds_max_after_mutations() {
        let mut c = Combatant::new("Ragnar", "Human", Origin::Gladiator, attrs()).unwrap();
        c.set_current_health(10_000);
        assert_eq!(c.current_health(), c.max_health());
        c.heal(10_000);
        assert!(c.current_health() <= c.max_health());
    }
}
