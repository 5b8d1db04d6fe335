//! Bestiary enemy templates.
//!
//! Enemies are fixed stat templates, not leveling characters: spawning
//! one produces a full-health combatant and nothing is ever persisted
//! back. Tougher entries are gated behind a minimum gladiator level.

use arena_core::{Attributes, Combatant, CombatantError, Origin};

/// A fixed enemy stat template.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub description: String,
    /// Minimum gladiator level required to face this enemy.
    pub min_level: u32,
    pub attributes: Attributes,
}

impl EnemyTemplate {
    /// Spawn a full-health combatant from this template.
    pub fn to_combatant(&self) -> Result<Combatant, CombatantError> {
        Combatant::new(self.name.clone(), "Enemy", Origin::Enemy, self.attributes)
    }
}

/// Lookup table of bestiary enemies.
#[derive(Clone, Debug, Default)]
pub struct EnemyCatalog {
    enemies: Vec<EnemyTemplate>,
}

impl EnemyCatalog {
    /// The built-in bestiary.
    pub fn builtin() -> Self {
        let entry = |name: &str, description: &str, min_level, attributes| EnemyTemplate {
            name: name.to_owned(),
            description: description.to_owned(),
            min_level,
            attributes,
        };
        Self {
            enemies: vec![
                entry(
                    "Slime",
                    "A weak but persistent blob of goo.",
                    1,
                    Attributes::new(3, 5, 5, 1, 33, 30),
                ),
                entry(
                    "Goblin",
                    "A sneaky goblin, quick but fragile.",
                    1,
                    Attributes::new(5, 10, 12, 3, 40, 40),
                ),
                entry(
                    "Skeleton",
                    "A reanimated skeleton, hard to kill.",
                    2,
                    Attributes::new(7, 7, 8, 4, 53, 60),
                ),
                entry(
                    "Bandit",
                    "A quick and greedy human outlaw.",
                    3,
                    Attributes::new(8, 11, 11, 5, 59, 50),
                ),
                entry(
                    "Dark Knight",
                    "A fallen knight, skilled and dangerous.",
                    5,
                    Attributes::new(10, 8, 9, 8, 73, 65),
                ),
                entry(
                    "Minotaur",
                    "A massive beast with brutal power.",
                    7,
                    Attributes::new(14, 4, 6, 6, 93, 70),
                ),
            ],
        }
    }

    /// Build a catalog from externally loaded templates.
    pub fn from_templates(enemies: Vec<EnemyTemplate>) -> Self {
        Self { enemies }
    }

    /// Look up an enemy by exact name.
    pub fn get(&self, name: &str) -> Option<&EnemyTemplate> {
        self.enemies.iter().find(|enemy| enemy.name == name)
    }

    /// Enemies a gladiator of the given level may face.
    pub fn unlocked_at(&self, level: u32) -> impl Iterator<Item = &EnemyTemplate> {
        self.enemies
            .iter()
            .filter(move |enemy| enemy.min_level <= level)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyTemplate> {
        self.enemies.iter()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_spawns_a_valid_combatant() {
        for enemy in EnemyCatalog::builtin().iter() {
            let combatant = enemy.to_combatant().unwrap();
            assert!(combatant.is_alive());
            assert_eq!(combatant.current_health(), combatant.max_health());
            assert_eq!(combatant.origin(), Origin::Enemy);
        }
    }

    #[test]
    fn level_gating_filters_the_roster() {
        let catalog = EnemyCatalog::builtin();
        let rookie: Vec<_> = catalog.unlocked_at(1).map(|e| e.name.as_str()).collect();
        assert_eq!(rookie, ["Slime", "Goblin"]);
        assert_eq!(catalog.unlocked_at(10).count(), catalog.len());
    }

    #[test]
    fn minotaur_is_the_heavyweight() {
        let catalog = EnemyCatalog::builtin();
        let minotaur = catalog.get("Minotaur").unwrap();
        let max_strength = catalog.iter().map(|e| e.attributes.strength).max().unwrap();
        assert_eq!(minotaur.attributes.strength, max_strength);
    }
}
