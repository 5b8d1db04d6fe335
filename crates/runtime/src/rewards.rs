//! Post-fight reward policy and opponent difficulty scaling.
//!
//! The engine decides who won; how much that is worth is policy owned
//! here. Reward amounts scale with the difficulty the opponent was
//! generated at, never with anything inside the engine.

use arena_core::Attributes;

/// Difficulty tier of a generated opponent.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Difficulty {
    Weak,
    #[default]
    Normal,
    Strong,
}

impl Difficulty {
    /// Scale a generated opponent's attributes for this tier.
    ///
    /// Weak opponents lose a fifth of their strength and dodge and a
    /// tenth of their bulk; strong ones gain the same proportions.
    pub fn scale(self, attributes: &mut Attributes) {
        let (offense_pct, vitality_pct) = match self {
            Difficulty::Weak => (80, 90),
            Difficulty::Normal => return,
            Difficulty::Strong => (120, 110),
        };
        attributes.strength = attributes.strength * offense_pct / 100;
        attributes.dodge = attributes.dodge * offense_pct / 100;
        attributes.vitality = attributes.vitality * vitality_pct / 100;
    }
}

/// Experience and gold paid out for a victory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FightRewards {
    pub experience: i64,
    pub gold: u32,
}

impl FightRewards {
    /// Reward table by opponent difficulty.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Weak => Self {
                experience: 30,
                gold: 10,
            },
            Difficulty::Normal => Self {
                experience: 45,
                gold: 20,
            },
            Difficulty::Strong => Self {
                experience: 60,
                gold: 30,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewards_rise_with_difficulty() {
        let weak = FightRewards::for_difficulty(Difficulty::Weak);
        let normal = FightRewards::for_difficulty(Difficulty::Normal);
        let strong = FightRewards::for_difficulty(Difficulty::Strong);
        assert!(weak.experience < normal.experience);
        assert!(normal.experience < strong.experience);
        assert!(weak.gold < normal.gold && normal.gold < strong.gold);
    }

    #[test]
    fn normal_scaling_is_identity() {
        let mut attrs = Attributes::new(10, 8, 9, 5, 66, 50);
        let original = attrs;
        Difficulty::Normal.scale(&mut attrs);
        assert_eq!(attrs, original);
    }

    #[test]
    fn weak_and_strong_adjust_offense_and_bulk() {
        let mut weak = Attributes::new(10, 10, 9, 5, 60, 50);
        Difficulty::Weak.scale(&mut weak);
        assert_eq!(weak.strength, 8);
        assert_eq!(weak.dodge, 8);
        assert_eq!(weak.vitality, 54);

        let mut strong = Attributes::new(10, 10, 9, 5, 60, 50);
        Difficulty::Strong.scale(&mut strong);
        assert_eq!(strong.strength, 12);
        assert_eq!(strong.dodge, 12);
        assert_eq!(strong.vitality, 66);
    }
}
