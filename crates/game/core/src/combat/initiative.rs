//! Turn-order arbitration.
//!
//! Initiative gives a probabilistic, not deterministic, first-strike
//! advantage: each point of initiative difference shifts the player's
//! chance to open the round by 4.5%, clamped so neither side is ever
//! locked out entirely.

use crate::rng::RngOracle;

/// Chance shift per point of initiative difference.
const PER_POINT_SHIFT: f64 = 0.045;

/// Chance that the player acts first in a round.
///
/// # Formula
///
/// ```text
/// clamp(0.5 + (player_initiative - opponent_initiative) * 0.045, 0.05, 0.95)
/// ```
///
/// Equal initiative yields exactly 50%.
pub fn first_strike_chance(player_initiative: i32, opponent_initiative: i32) -> f64 {
    let diff = f64::from(player_initiative - opponent_initiative);
    (0.5 + diff * PER_POINT_SHIFT).clamp(0.05, 0.95)
}

/// Draw the first striker for a round. True means the player opens.
pub fn player_strikes_first(
    player_initiative: i32,
    opponent_initiative: i32,
    rng: &mut (impl RngOracle + ?Sized),
) -> bool {
    rng.fraction() < first_strike_chance(player_initiative, opponent_initiative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::SequenceRng;

    #[test]
    fn equal_initiative_is_a_coin_flip() {
        assert_eq!(first_strike_chance(10, 10), 0.5);
    }

    #[test]
    fn advantage_shifts_by_45_per_mille_per_point() {
        assert!((first_strike_chance(12, 10) - 0.59).abs() < 1e-12);
        assert!((first_strike_chance(10, 12) - 0.41).abs() < 1e-12);
    }

    #[test]
    fn chance_clamps_at_extremes() {
        assert_eq!(first_strike_chance(1000, 0), 0.95);
        assert_eq!(first_strike_chance(0, 1000), 0.05);
    }

    #[test]
    fn low_draw_gives_player_the_opening() {
        let mut rng = SequenceRng::new(vec![0]);
        assert!(player_strikes_first(0, 1000, &mut rng));
    }

    #[test]
    fn high_draw_gives_opponent_the_opening() {
        let mut rng = SequenceRng::new(vec![u32::MAX]);
        assert!(!player_strikes_first(1000, 0, &mut rng));
    }
}
