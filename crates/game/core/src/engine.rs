//! Round resolution.
//!
//! The [`CombatEngine`] is the authoritative reducer for an
//! [`EncounterSession`]: it resolves exactly one round per call, mutating
//! the session's health, stamina, round counter, and log, and reports the
//! outcome. It performs no I/O; all randomness flows through the injected
//! [`RngOracle`].
//!
//! # Round anatomy
//!
//! 1. Turn order drawn from the initiative contest.
//! 2. First striker attacks; a kill ends the round immediately, the
//!    return blow never happens.
//! 3. Otherwise the other side strikes back; again a kill ends the round.
//! 4. Survivors pay the round's stamina drain from their session pools;
//!    an emptied pool loses the fight, player side checked first.

use crate::combat::{drain_for_round, player_strikes_first, resolve_attack};
use crate::rng::RngOracle;
use crate::session::{EncounterSession, Winner};
use crate::stats::Combatant;

/// Outcome of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    /// 1-based number of the round just resolved.
    pub round: u32,
    /// Log lines produced by this round, in order.
    pub actions: Vec<String>,
    /// `None` while the fight continues.
    pub winner: Option<Winner>,
}

/// Errors surfaced while driving a session through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    /// The session already has a winner. Resolving further rounds is a
    /// caller bug, distinct from any gameplay outcome.
    #[error("encounter is already decided ({winner} won); no further rounds may be resolved")]
    SessionTerminal { winner: Winner },
}

/// Which seat a combatant occupies in the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Player,
    Opponent,
}

impl Side {
    fn winner(self) -> Winner {
        match self {
            Side::Player => Winner::Player,
            Side::Opponent => Winner::Opponent,
        }
    }

    fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Combat engine resolving rounds against a mutably borrowed session.
pub struct CombatEngine<'a> {
    session: &'a mut EncounterSession,
}

impl<'a> CombatEngine<'a> {
    pub fn new(session: &'a mut EncounterSession) -> Self {
        Self { session }
    }

    /// Resolve the next round of the fight.
    ///
    /// Returns the round outcome, or [`RoundError::SessionTerminal`] if a
    /// winner was already decided.
    pub fn resolve_round(
        &mut self,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<RoundOutcome, RoundError> {
        if let Some(winner) = self.session.winner {
            return Err(RoundError::SessionTerminal { winner });
        }

        self.session.round += 1;
        let round = self.session.round;
        let mut actions = Vec::new();
        self.push_log(&mut actions, format!("Round {round}"));

        let first = if player_strikes_first(
            self.session.player.attributes().initiative,
            self.session.opponent.attributes().initiative,
            rng,
        ) {
            Side::Player
        } else {
            Side::Opponent
        };

        // Opening attack; a kill cuts the round short.
        self.attack(first, &mut actions, rng);
        if let Some(winner) = self.death_check(first) {
            return Ok(self.conclude(round, actions, winner));
        }

        // Return blow.
        let second = first.other();
        self.attack(second, &mut actions, rng);
        if let Some(winner) = self.death_check(second) {
            return Ok(self.conclude(round, actions, winner));
        }

        // End-of-round attrition, only when both still stand.
        if let Some(winner) = self.drain_stamina(round, &mut actions) {
            return Ok(self.conclude(round, actions, winner));
        }

        Ok(RoundOutcome {
            round,
            actions,
            winner: None,
        })
    }

    /// Resolve one attack from `attacker_side`, apply damage, log it.
    fn attack(
        &mut self,
        attacker_side: Side,
        actions: &mut Vec<String>,
        rng: &mut (impl RngOracle + ?Sized),
    ) {
        let (attacker, defender) = self.pair_mut(attacker_side);
        let result = resolve_attack(attacker, defender, rng);

        let line = if result.is_miss() {
            format!("{} MISSES!", attacker.name())
        } else {
            let applied = defender.take_damage(result.damage);
            let crit = if result.is_critical() {
                " (CRITICAL!)"
            } else {
                ""
            };
            format!(
                "{} hits {} for {applied} damage{crit}",
                attacker.name(),
                defender.name()
            )
        };
        self.push_log(actions, line);
    }

    /// After `attacker_side` struck, did its target die?
    fn death_check(&self, attacker_side: Side) -> Option<Winner> {
        let defender = match attacker_side {
            Side::Player => &self.session.opponent,
            Side::Opponent => &self.session.player,
        };
        (!defender.is_alive()).then(|| attacker_side.winner())
    }

    /// Subtract the round's stamina drain from both pools and check for
    /// exhaustion. The player side is checked first: if both pools empty
    /// in the same round, the player is the one who collapses.
    fn drain_stamina(&mut self, round: u32, actions: &mut Vec<String>) -> Option<Winner> {
        let drain = drain_for_round(round);
        if drain <= 0 {
            return None;
        }

        self.session.player_stamina -= drain;
        self.session.opponent_stamina -= drain;

        if self.session.player_stamina <= 0 {
            let line = format!("{} collapses from exhaustion!", self.session.player.name());
            self.push_log(actions, line);
            return Some(Winner::Opponent);
        }
        if self.session.opponent_stamina <= 0 {
            let line = format!(
                "{} collapses from exhaustion!",
                self.session.opponent.name()
            );
            self.push_log(actions, line);
            return Some(Winner::Player);
        }
        None
    }

    fn conclude(&mut self, round: u32, actions: Vec<String>, winner: Winner) -> RoundOutcome {
        self.session.winner = Some(winner);
        RoundOutcome {
            round,
            actions,
            winner: Some(winner),
        }
    }

    /// Append to both the round's action list and the session transcript.
    fn push_log(&mut self, actions: &mut Vec<String>, line: String) {
        actions.push(line.clone());
        self.session.log.push(line);
    }

    fn pair_mut(&mut self, attacker_side: Side) -> (&Combatant, &mut Combatant) {
        match attacker_side {
            Side::Player => (&self.session.player, &mut self.session.opponent),
            Side::Opponent => (&self.session.opponent, &mut self.session.player),
        }
    }
}
