//! Per-player session registry.
//!
//! The combat core holds no global state; every active fight lives here,
//! keyed by player token. Each entry carries its own lock so independent
//! fights resolve concurrently, while rounds of the *same* fight are
//! serialized through the entry mutex (one writer per session, always).
//! Each fight also owns its own RNG stream, so no two sessions ever share
//! randomness.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use arena_core::{EncounterSession, PcgRng};

use crate::error::RuntimeError;
use crate::repository::PlayerToken;
use crate::rewards::Difficulty;

/// One in-flight fight: the session plus the context the service needs
/// when it concludes.
#[derive(Clone, Debug)]
pub struct ActiveFight {
    pub session: EncounterSession,
    pub difficulty: Difficulty,
    /// Per-session RNG stream; seeded at fight start for replayability.
    pub rng: PcgRng,
}

impl ActiveFight {
    pub fn new(session: EncounterSession, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            session,
            difficulty,
            rng: PcgRng::seeded(seed),
        }
    }
}

/// Registry of active fights, one at most per player token.
#[derive(Default)]
pub struct SessionRegistry {
    fights: RwLock<HashMap<PlayerToken, Arc<Mutex<ActiveFight>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fight for a token.
    ///
    /// Rejected if the token already has one in flight; the old fight
    /// must conclude or be abandoned first.
    pub fn begin(&self, token: &PlayerToken, fight: ActiveFight) -> Result<(), RuntimeError> {
        let mut fights = self
            .fights
            .write()
            .map_err(|_| RuntimeError::RegistryPoisoned)?;
        if fights.contains_key(token) {
            return Err(RuntimeError::FightInProgress);
        }
        fights.insert(token.clone(), Arc::new(Mutex::new(fight)));
        Ok(())
    }

    /// Run a closure against the token's active fight.
    ///
    /// The map lock is released before the entry lock is taken, so a
    /// long round never blocks other players' fights.
    pub fn with_fight<R>(
        &self,
        token: &PlayerToken,
        f: impl FnOnce(&mut ActiveFight) -> Result<R, RuntimeError>,
    ) -> Result<R, RuntimeError> {
        let entry = {
            let fights = self
                .fights
                .read()
                .map_err(|_| RuntimeError::RegistryPoisoned)?;
            fights
                .get(token)
                .cloned()
                .ok_or(RuntimeError::NoActiveFight)?
        };
        let mut fight = entry.lock().map_err(|_| RuntimeError::RegistryPoisoned)?;
        f(&mut fight)
    }

    /// Remove and return the token's active fight.
    pub fn end(&self, token: &PlayerToken) -> Result<ActiveFight, RuntimeError> {
        let entry = {
            let mut fights = self
                .fights
                .write()
                .map_err(|_| RuntimeError::RegistryPoisoned)?;
            fights.remove(token).ok_or(RuntimeError::NoActiveFight)?
        };
        match Arc::try_unwrap(entry) {
            Ok(mutex) => mutex
                .into_inner()
                .map_err(|_| RuntimeError::RegistryPoisoned),
            // Another handle is briefly alive; clone the state out.
            Err(shared) => {
                let fight = shared.lock().map_err(|_| RuntimeError::RegistryPoisoned)?;
                Ok(fight.clone())
            }
        }
    }

    /// True if the token has a fight in flight.
    pub fn has_fight(&self, token: &PlayerToken) -> bool {
        self.fights
            .read()
            .map(|fights| fights.contains_key(token))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Attributes, Combatant, Origin};

    fn fight() -> ActiveFight {
        let attrs = Attributes::new(10, 8, 9, 5, 66, 50);
        let player = Combatant::new("a", "Human", Origin::Gladiator, attrs).unwrap();
        let opponent = Combatant::new("b", "Human", Origin::Enemy, attrs).unwrap();
        ActiveFight::new(
            EncounterSession::new(player, opponent),
            Difficulty::Normal,
            7,
        )
    }

    #[test]
    fn one_fight_per_token() {
        let registry = SessionRegistry::new();
        let token = PlayerToken::from("tok");
        registry.begin(&token, fight()).unwrap();
        assert!(matches!(
            registry.begin(&token, fight()),
            Err(RuntimeError::FightInProgress)
        ));
    }

    #[test]
    fn missing_fight_is_reported() {
        let registry = SessionRegistry::new();
        let token = PlayerToken::from("tok");
        assert!(matches!(
            registry.with_fight(&token, |_| Ok(())),
            Err(RuntimeError::NoActiveFight)
        ));
        assert!(matches!(
            registry.end(&token),
            Err(RuntimeError::NoActiveFight)
        ));
    }

    #[test]
    fn end_releases_the_token() {
        let registry = SessionRegistry::new();
        let token = PlayerToken::from("tok");
        registry.begin(&token, fight()).unwrap();
        assert!(registry.has_fight(&token));

        let ended = registry.end(&token).unwrap();
        assert_eq!(ended.session.round(), 0);
        assert!(!registry.has_fight(&token));
        // token free for a new fight
        registry.begin(&token, fight()).unwrap();
    }

    #[test]
    fn independent_tokens_do_not_collide() {
        let registry = SessionRegistry::new();
        registry.begin(&PlayerToken::from("a"), fight()).unwrap();
        registry.begin(&PlayerToken::from("b"), fight()).unwrap();
        assert!(registry.has_fight(&PlayerToken::from("a")));
        assert!(registry.has_fight(&PlayerToken::from("b")));
    }
}
