//! Per-fight encounter state.
//!
//! An [`EncounterSession`] is ephemeral: created when a fight starts,
//! destroyed when it concludes or is abandoned. It exclusively owns both
//! combatants' live health for the duration, the round counter, the
//! append-only action log, and the two stamina pools seeded from each
//! side's stamina attribute. Saving anything back to durable storage is
//! the caller's job, after each round or when the fight ends.

use crate::stats::Combatant;

/// Which side won a concluded fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player,
    Opponent,
}

/// Mutable state of one fight between two combatants.
///
/// By caller convention both combatants enter at full health; the session
/// does not enforce that, it only arbitrates from wherever they start.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSession {
    pub(crate) player: Combatant,
    pub(crate) opponent: Combatant,
    /// Rounds resolved so far; incremented once per resolved round.
    pub(crate) round: u32,
    /// Ordered, append-only fight transcript.
    pub(crate) log: Vec<String>,
    /// Session-local stamina pools, seeded from the stamina attribute.
    pub(crate) player_stamina: i32,
    pub(crate) opponent_stamina: i32,
    /// Set exactly once; the session is terminal afterwards.
    pub(crate) winner: Option<Winner>,
}

impl EncounterSession {
    /// Open a fresh session around two combatants.
    pub fn new(player: Combatant, opponent: Combatant) -> Self {
        let player_stamina = player.attributes().stamina;
        let opponent_stamina = opponent.attributes().stamina;
        Self {
            player,
            opponent,
            round: 0,
            log: Vec::new(),
            player_stamina,
            opponent_stamina,
            winner: None,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    /// Rounds resolved so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player_stamina(&self) -> i32 {
        self.player_stamina
    }

    pub fn opponent_stamina(&self) -> i32 {
        self.opponent_stamina
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// True once a winner has been decided; no further rounds may run.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Full fight transcript so far.
    pub fn action_log(&self) -> &[String] {
        &self.log
    }

    /// Read-only snapshot for external reporting.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            round: self.round,
            player_name: self.player.name().to_owned(),
            opponent_name: self.opponent.name().to_owned(),
            player_health: self.player.current_health(),
            player_max_health: self.player.max_health(),
            opponent_health: self.opponent.current_health(),
            opponent_max_health: self.opponent.max_health(),
            winner: self.winner,
            action_log: self.log.clone(),
        }
    }

    /// Tear the session down, releasing both combatants and the outcome
    /// so the owning layer can persist results.
    pub fn into_parts(self) -> (Combatant, Combatant, Option<Winner>) {
        (self.player, self.opponent, self.winner)
    }
}

/// Stable read-only view of a session for reporting layers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub round: u32,
    pub player_name: String,
    pub opponent_name: String,
    pub player_health: i32,
    pub player_max_health: i32,
    pub opponent_health: i32,
    pub opponent_max_health: i32,
    pub winner: Option<Winner>,
    pub action_log: Vec<String>,
}
