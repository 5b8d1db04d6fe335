//! Hit chance and accuracy calculations.

use crate::rng::RngOracle;

/// Weight applied to the defender's dodge when building the contest.
const DODGE_WEIGHT: f64 = 0.25;

/// Calculate hit chance from attacker weaponskill vs defender dodge.
///
/// # Formula
///
/// ```text
/// hit_rating   = max(1, weaponskill)
/// dodge_rating = max(1, dodge * 0.25)
/// hit_chance   = clamp(hit_rating / (hit_rating + dodge_rating), 0.05, 0.95)
/// ```
///
/// The clamp guarantees that no stat ratio, however extreme, produces a
/// guaranteed hit or a guaranteed miss.
pub fn hit_chance(weaponskill: i32, dodge: i32) -> f64 {
    let hit_rating = f64::from(weaponskill.max(1));
    let dodge_rating = (f64::from(dodge) * DODGE_WEIGHT).max(1.0);
    (hit_rating / (hit_rating + dodge_rating)).clamp(0.05, 0.95)
}

/// Draw a hit check. True if the attack lands.
pub fn check_hit(
    weaponskill: i32,
    dodge: i32,
    rng: &mut (impl RngOracle + ?Sized),
) -> bool {
    rng.fraction() <= hit_chance(weaponskill, dodge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::SequenceRng;

    #[test]
    fn master_vs_sluggish_clamps_high() {
        assert_eq!(hit_chance(100, 1), 0.95);
    }

    #[test]
    fn clumsy_vs_untouchable_clamps_low() {
        assert_eq!(hit_chance(1, 10_000), 0.05);
    }

    #[test]
    fn zero_stats_floor_to_one() {
        // Both ratings floor at 1: 1 / (1 + 1) = 0.5
        assert_eq!(hit_chance(0, 0), 0.5);
    }

    #[test]
    fn chance_always_within_clamp_bounds() {
        for ws in [0, 1, 5, 50, 500, 5000] {
            for dodge in [0, 1, 5, 50, 500, 5000] {
                let chance = hit_chance(ws, dodge);
                assert!((0.05..=0.95).contains(&chance), "ws={ws} dodge={dodge}");
            }
        }
    }

    #[test]
    fn draw_above_chance_misses() {
        let mut rng = SequenceRng::new(vec![u32::MAX]);
        assert!(!check_hit(1, 10_000, &mut rng));
    }

    #[test]
    fn draw_below_chance_hits() {
        let mut rng = SequenceRng::new(vec![0]);
        assert!(check_hit(1, 10_000, &mut rng));
    }
}
