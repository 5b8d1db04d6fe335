//! Race definitions.
//!
//! Every recruit starts from the same baseline attribute line; a race is
//! a set of named percentage adjustments folded in exactly once at
//! creation time. The built-in roster keeps the classic two: balanced
//! Humans and hard-hitting, slow Orcs.

use arena_core::{Attributes, RacialModifiers};

/// Common starting attributes before racial adjustment.
///
/// Tuned so an unmodified recruit sits at 100 max health
/// (vitality 66 -> 1 + floor(66 * 1.5)).
pub const RECRUIT_BASELINE: Attributes = Attributes {
    strength: 8,
    dodge: 8,
    initiative: 9,
    weaponskill: 4,
    vitality: 66,
    stamina: 50,
};

/// A playable race: display data plus its creation-time adjustments.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RaceDefinition {
    pub name: String,
    pub description: String,
    pub modifiers: RacialModifiers,
}

impl RaceDefinition {
    /// The attribute line a fresh recruit of this race starts with.
    ///
    /// Adjustments are applied here and never again.
    pub fn starting_attributes(&self) -> Attributes {
        self.modifiers.apply(&RECRUIT_BASELINE)
    }
}

/// Lookup table of playable races.
#[derive(Clone, Debug, Default)]
pub struct RaceCatalog {
    races: Vec<RaceDefinition>,
}

impl RaceCatalog {
    /// The built-in roster.
    pub fn builtin() -> Self {
        Self {
            races: vec![
                RaceDefinition {
                    name: "Human".to_owned(),
                    description: "Balanced warriors with versatile combat skills".to_owned(),
                    modifiers: RacialModifiers {
                        weaponskill_pct: 25,
                        initiative_pct: 15,
                        ..RacialModifiers::none()
                    },
                },
                RaceDefinition {
                    name: "Orc".to_owned(),
                    description: "Powerful and hardy, with high health and strength".to_owned(),
                    modifiers: RacialModifiers {
                        strength_pct: 25,
                        dodge_pct: -35,
                        initiative_pct: -20,
                        weaponskill_pct: -25,
                        vitality_pct: 20,
                        stamina_pct: 10,
                    },
                },
            ],
        }
    }

    /// Build a catalog from externally loaded definitions.
    pub fn from_definitions(races: Vec<RaceDefinition>) -> Self {
        Self { races }
    }

    /// Look up a race by exact name.
    pub fn get(&self, name: &str) -> Option<&RaceDefinition> {
        self.races.iter().find(|race| race.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.races.iter().map(|race| race.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RaceDefinition> {
        self.races.iter()
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::max_health_for;

    #[test]
    fn human_line_matches_classic_stats() {
        let catalog = RaceCatalog::builtin();
        let human = catalog.get("Human").unwrap().starting_attributes();
        assert_eq!(human.strength, 8);
        assert_eq!(human.dodge, 8);
        assert_eq!(human.initiative, 10);
        assert_eq!(human.weaponskill, 5);
        assert_eq!(max_health_for(human.vitality), 100);
    }

    #[test]
    fn orc_trades_finesse_for_bulk() {
        let catalog = RaceCatalog::builtin();
        let orc = catalog.get("Orc").unwrap().starting_attributes();
        assert_eq!(orc.strength, 10);
        assert_eq!(orc.dodge, 5);
        assert_eq!(orc.initiative, 7);
        assert_eq!(orc.weaponskill, 3);
        assert!(orc.vitality > RECRUIT_BASELINE.vitality);
    }

    #[test]
    fn unknown_race_is_none() {
        assert!(RaceCatalog::builtin().get("Elf").is_none());
    }
}
