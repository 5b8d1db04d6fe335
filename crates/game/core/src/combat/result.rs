//! Attack result types and full attack resolution.

use crate::rng::RngOracle;
use crate::stats::Combatant;

use super::damage::{CRIT_CHANCE_PERCENT, critical_damage, roll_damage, roll_spread};
use super::hit::check_hit;

/// Outcome of a single attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed or was dodged; no damage.
    Miss,
    /// Attack landed for normal damage.
    Hit,
    /// Attack landed critically (damage x1.5).
    Critical,
}

/// Result of one resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Damage to subtract from the defender; 0 on a miss.
    pub damage: i32,
}

impl AttackResult {
    pub fn is_miss(&self) -> bool {
        self.outcome == AttackOutcome::Miss
    }

    pub fn is_critical(&self) -> bool {
        self.outcome == AttackOutcome::Critical
    }
}

/// Resolve one attack from `attacker` against `defender`.
///
/// Draw order is fixed for replay stability: damage variance, hit check,
/// then the critical roll (the critical roll is skipped on a miss).
/// The defender's health is untouched; applying the damage is the round
/// engine's job.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &Combatant,
    rng: &mut (impl RngOracle + ?Sized),
) -> AttackResult {
    let spread = roll_spread(rng);

    if !check_hit(
        attacker.attributes().weaponskill,
        defender.attributes().dodge,
        rng,
    ) {
        return AttackResult {
            outcome: AttackOutcome::Miss,
            damage: 0,
        };
    }

    let damage = roll_damage(attacker.attributes().strength, spread);

    if rng.roll_d100() <= CRIT_CHANCE_PERCENT {
        AttackResult {
            outcome: AttackOutcome::Critical,
            damage: critical_damage(damage),
        }
    } else {
        AttackResult {
            outcome: AttackOutcome::Hit,
            damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::SequenceRng;
    use crate::stats::{Attributes, Origin};

    fn combatant(strength: i32, dodge: i32, weaponskill: i32) -> Combatant {
        Combatant::new(
            "fighter",
            "Human",
            Origin::Gladiator,
            Attributes::new(strength, dodge, 5, weaponskill, 40, 40),
        )
        .unwrap()
    }

    #[test]
    fn forced_critical_hits_for_truncated_bonus_damage() {
        let attacker = combatant(30, 0, 100);
        let defender = combatant(5, 1, 5);

        // spread = 1.0, hit draw = 0 (hits), crit roll = 1 (<= 5)
        let mut rng = SequenceRng::new(vec![
            SequenceRng::raw_fraction(0.5), // spread midpoint -> exactly 1.0
            0,                              // hit
            0,                              // d100 -> 1, critical
        ]);

        let result = resolve_attack(&attacker, &defender, &mut rng);
        assert!(result.is_critical());
        // floor(30 * 0.088 * 1.0) = 2, * 1.5 truncated = 3
        assert_eq!(result.damage, 3);
    }

    #[test]
    fn forced_miss_deals_no_damage_and_no_crit() {
        let attacker = combatant(30, 0, 1);
        let defender = combatant(5, 100_000, 5);

        // hitChance clamps to 0.05; hit draw forced above it
        let mut rng = SequenceRng::new(vec![
            SequenceRng::raw_fraction(0.5), // spread (drawn before the hit check)
            u32::MAX,                       // miss
        ]);

        let result = resolve_attack(&attacker, &defender, &mut rng);
        assert!(result.is_miss());
        assert_eq!(result.damage, 0);
    }

    #[test]
    fn ordinary_hit_uses_plain_damage() {
        let attacker = combatant(30, 0, 100);
        let defender = combatant(5, 1, 5);

        let mut rng = SequenceRng::new(vec![
            SequenceRng::raw_fraction(0.5), // spread 1.0
            0,                              // hit
            u32::MAX,                       // d100 well above 5, no crit
        ]);

        let result = resolve_attack(&attacker, &defender, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Hit);
        assert_eq!(result.damage, 2);
    }
}
