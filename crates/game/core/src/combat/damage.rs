//! Damage calculation.

use crate::rng::RngOracle;

/// Strength-to-damage coefficient.
const DAMAGE_COEFF: f64 = 0.088;

/// Lower and upper bounds of the damage variance multiplier.
pub const SPREAD_MIN: f64 = 0.85;
pub const SPREAD_MAX: f64 = 1.15;

/// Critical hits multiply damage by 1.5, truncated to an integer.
const CRIT_MULTIPLIER: f64 = 1.5;

/// Chance of a critical hit, in percent (d100 roll at or below this).
pub const CRIT_CHANCE_PERCENT: u32 = 5;

/// Compute base damage for an attack given a variance multiplier.
///
/// # Formula
///
/// ```text
/// floor(strength * 0.088 * spread)
/// ```
///
/// If the result is 0 while the attacker has any strength at all, it is
/// floored to 1: a landed hit is never damage-free, only a miss is.
pub fn roll_damage(strength: i32, spread: f64) -> i32 {
    let raw = f64::from(strength) * DAMAGE_COEFF * spread;
    let damage = raw as i32;
    if damage == 0 && strength > 0 { 1 } else { damage }
}

/// Draw the variance multiplier for an attack, uniform in [0.85, 1.15).
pub fn roll_spread(rng: &mut (impl RngOracle + ?Sized)) -> f64 {
    rng.spread(SPREAD_MIN, SPREAD_MAX)
}

/// Apply the critical multiplier to already-rolled damage.
pub fn critical_damage(damage: i32) -> i32 {
    (f64::from(damage) * CRIT_MULTIPLIER) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_damage_truncates() {
        // 30 * 0.088 = 2.64 -> 2
        assert_eq!(roll_damage(30, 1.0), 2);
        // 30 * 0.088 * 1.15 = 3.036 -> 3
        assert_eq!(roll_damage(30, 1.15), 3);
    }

    #[test]
    fn weak_hit_floors_to_one() {
        // 1 * 0.088 * 0.85 = 0.0748 -> 0, floored to 1
        assert_eq!(roll_damage(1, 0.85), 1);
    }

    #[test]
    fn zero_strength_deals_zero() {
        assert_eq!(roll_damage(0, 1.15), 0);
    }

    #[test]
    fn critical_multiplier_truncates() {
        assert_eq!(critical_damage(2), 3); // 3.0
        assert_eq!(critical_damage(3), 4); // 4.5 -> 4
        assert_eq!(critical_damage(0), 0);
    }
}
