//! Leveling and persistent progression state.
//!
//! Progression outlives any single fight: experience, level, unspent stat
//! points, gold, and the win/loss record. The engine itself never touches
//! this module; the layer that owns persistence applies rewards here after
//! a fight concludes.

// Power curve fitted so:
// level 18 -> 3999 XP to level up
// level 30 -> 8458 XP to level up
const XP_COEFF: f64 = 57.70789704047412;
const XP_POWER: f64 = 1.466387695400268;

/// Stat points granted per level gained.
const STAT_POINTS_PER_LEVEL: u32 = 20;

/// XP required to advance from the given level.
///
/// Monotonically increasing in `level`, floored at 1 so no level ever
/// requires zero experience. Levels below 1 are treated as 1.
pub fn xp_to_next(level: u32) -> u64 {
    let level = level.max(1);
    (XP_COEFF * f64::from(level).powf(XP_POWER)).round().max(1.0) as u64
}

/// Result of applying an experience reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceGain {
    /// Levels crossed by this single application (0 if none).
    pub levels_gained: u32,
    /// XP required to advance from the (possibly new) current level.
    pub xp_to_next: u64,
}

/// Errors from spending progression currency.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("not enough stat points: have {available}, need {requested}")]
    InsufficientStatPoints { available: u32, requested: u32 },

    #[error("not enough gold: have {available}, need {requested}")]
    InsufficientGold { available: u32, requested: u32 },
}

/// Persistent leveling state for a player profile.
///
/// Created at character creation, mutated by training, stat allocation,
/// and post-combat rewards. Never destroyed except by explicit reset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub level: u32,
    pub experience: u64,
    pub stat_points: u32,
    pub gold: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Progression {
    /// Fresh level-1 progression with the given starting gold.
    pub fn starting(gold: u32) -> Self {
        Self {
            level: 1,
            experience: 0,
            stat_points: 0,
            gold,
            wins: 0,
            losses: 0,
        }
    }

    /// Apply an experience reward, leveling up as needed.
    ///
    /// `amount <= 0` is a no-op and never changes level, experience, or
    /// stat points. A single large reward can cross several thresholds;
    /// all of them are resolved in this one call, and the overflow
    /// remainder stays on `experience`. Each level gained grants 20 stat
    /// points, credited once after the loop.
    pub fn apply_experience(&mut self, amount: i64) -> ExperienceGain {
        if amount <= 0 {
            return ExperienceGain {
                levels_gained: 0,
                xp_to_next: xp_to_next(self.level),
            };
        }

        self.experience += amount as u64;
        let mut levels_gained = 0;

        loop {
            let required = xp_to_next(self.level);
            if self.experience < required {
                break;
            }
            self.experience -= required;
            self.level += 1;
            levels_gained += 1;
        }

        if levels_gained > 0 {
            self.stat_points += levels_gained * STAT_POINTS_PER_LEVEL;
        }

        ExperienceGain {
            levels_gained,
            xp_to_next: xp_to_next(self.level),
        }
    }

    /// Spend unallocated stat points.
    pub fn spend_stat_points(&mut self, amount: u32) -> Result<(), ProgressionError> {
        if amount > self.stat_points {
            return Err(ProgressionError::InsufficientStatPoints {
                available: self.stat_points,
                requested: amount,
            });
        }
        self.stat_points -= amount;
        Ok(())
    }

    /// Spend gold.
    pub fn spend_gold(&mut self, amount: u32) -> Result<(), ProgressionError> {
        if amount > self.gold {
            return Err(ProgressionError::InsufficientGold {
                available: self.gold,
                requested: amount,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }
}
