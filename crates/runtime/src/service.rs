//! The arena service: every operation a frontend can perform.
//!
//! The service wires profiles, catalogs, the session registry, and the
//! combat engine together. It is synchronous by design; one call fully
//! resolves before it returns, and per-player serialization is handled
//! by the registry's entry locks.

use rand::Rng;
use tracing::{debug, info};

use arena_content::{
    EnemyCatalog, EquipmentSlot, ItemCatalog, ItemDefinition, ItemId, RaceCatalog,
};
use arena_core::{
    Combatant, CombatEngine, EncounterSession, ExperienceGain, Origin, RoundOutcome,
    SessionSnapshot, Winner,
};

use crate::error::RuntimeError;
use crate::profile::{GladiatorProfile, StatAllocation};
use crate::registry::{ActiveFight, SessionRegistry};
use crate::repository::{PlayerToken, ProfileRepository};
use crate::rewards::{Difficulty, FightRewards};

/// How the opponent for a fight is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpponentSpec {
    /// A named bestiary enemy (level-gated).
    Enemy(String),
    /// A sparring gladiator of the given race, scaled to a difficulty.
    Scaled {
        race: String,
        difficulty: Difficulty,
    },
    /// Random race at a random difficulty.
    Random,
}

/// Final result of a fight from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum FightResult {
    Victory,
    Defeat,
}

/// Everything a frontend needs to present a concluded fight.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FightReport {
    pub result: FightResult,
    /// Payout on victory, `None` on defeat.
    pub rewards: Option<FightRewards>,
    /// Level changes from the experience payout, if any.
    pub experience: Option<ExperienceGain>,
    pub battle_log: Vec<String>,
    /// The profile as persisted after the fight.
    pub profile: GladiatorProfile,
}

/// Facade over profiles, catalogs, and fights for one deployment.
pub struct ArenaService<R: ProfileRepository> {
    repo: R,
    races: RaceCatalog,
    enemies: EnemyCatalog,
    items: ItemCatalog,
    registry: SessionRegistry,
}

impl<R: ProfileRepository> ArenaService<R> {
    /// Service over the built-in catalogs.
    pub fn new(repo: R) -> Self {
        Self::with_catalogs(
            repo,
            RaceCatalog::builtin(),
            EnemyCatalog::builtin(),
            ItemCatalog::builtin(),
        )
    }

    /// Service over externally loaded catalogs.
    pub fn with_catalogs(
        repo: R,
        races: RaceCatalog,
        enemies: EnemyCatalog,
        items: ItemCatalog,
    ) -> Self {
        Self {
            repo,
            races,
            enemies,
            items,
            registry: SessionRegistry::new(),
        }
    }

    // ========================================================================
    // Profile lifecycle
    // ========================================================================

    /// Create a gladiator for a token that has none yet.
    pub fn create_gladiator(
        &self,
        token: &PlayerToken,
        name: &str,
        race: &str,
    ) -> Result<GladiatorProfile, RuntimeError> {
        if self.repo.exists(token) {
            return Err(RuntimeError::GladiatorExists);
        }
        let race_def = self
            .races
            .get(race)
            .ok_or_else(|| RuntimeError::UnknownRace(race.to_owned()))?;

        let profile = GladiatorProfile::recruit(name, race_def)?;
        self.repo.save(token, &profile)?;
        info!(player = %token, name, race, "gladiator created");
        Ok(profile)
    }

    /// Load the token's profile.
    pub fn gladiator(&self, token: &PlayerToken) -> Result<GladiatorProfile, RuntimeError> {
        self.repo
            .load(token)?
            .ok_or(RuntimeError::UnknownGladiator)
    }

    /// Delete the token's profile (explicit character reset).
    pub fn reset_gladiator(&self, token: &PlayerToken) -> Result<(), RuntimeError> {
        self.repo.delete(token)?;
        Ok(())
    }

    /// One training session.
    pub fn train(&self, token: &PlayerToken) -> Result<GladiatorProfile, RuntimeError> {
        let mut profile = self.gladiator(token)?;
        let gain = profile.train()?;
        self.repo.save(token, &profile)?;
        debug!(player = %token, levels = gain.levels_gained, "training complete");
        Ok(profile)
    }

    /// Spend stat points.
    pub fn allocate_stat_points(
        &self,
        token: &PlayerToken,
        allocation: StatAllocation,
    ) -> Result<GladiatorProfile, RuntimeError> {
        let mut profile = self.gladiator(token)?;
        profile.allocate(allocation)?;
        self.repo.save(token, &profile)?;
        Ok(profile)
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    /// Items the gladiator could buy right now: level-appropriate and
    /// not already owned.
    pub fn shop(&self, token: &PlayerToken) -> Result<Vec<ItemDefinition>, RuntimeError> {
        let profile = self.gladiator(token)?;
        Ok(self
            .items
            .available_at_level(profile.progression.level)
            .filter(|item| !profile.owns(item.id))
            .cloned()
            .collect())
    }

    /// Buy an item from the shop.
    pub fn purchase(
        &self,
        token: &PlayerToken,
        item: ItemId,
    ) -> Result<GladiatorProfile, RuntimeError> {
        let mut profile = self.gladiator(token)?;
        let definition = self
            .items
            .get(item)
            .ok_or(RuntimeError::UnknownItem(item))?;

        if profile.owns(item) {
            return Err(RuntimeError::ItemAlreadyOwned(item));
        }
        if definition.level_requirement > profile.progression.level {
            return Err(RuntimeError::ItemLevelRequirement {
                item,
                required: definition.level_requirement,
            });
        }
        profile.progression.spend_gold(definition.value)?;
        profile.acquire(item);
        self.repo.save(token, &profile)?;
        Ok(profile)
    }

    /// Equip an owned item into a slot, replacing whatever was there.
    pub fn equip(
        &self,
        token: &PlayerToken,
        item: ItemId,
        slot: EquipmentSlot,
    ) -> Result<GladiatorProfile, RuntimeError> {
        let mut profile = self.gladiator(token)?;
        let definition = self
            .items
            .get(item)
            .ok_or(RuntimeError::UnknownItem(item))?;

        if !profile.owns(item) {
            return Err(RuntimeError::ItemNotOwned(item));
        }
        if definition.slot != slot {
            return Err(RuntimeError::SlotMismatch {
                item,
                expected: definition.slot,
                requested: slot,
            });
        }
        profile.equipped.insert(slot, item);
        self.repo.save(token, &profile)?;
        Ok(profile)
    }

    /// Empty a slot.
    pub fn unequip(
        &self,
        token: &PlayerToken,
        slot: EquipmentSlot,
    ) -> Result<GladiatorProfile, RuntimeError> {
        let mut profile = self.gladiator(token)?;
        if profile.equipped.remove(&slot).is_none() {
            return Err(RuntimeError::SlotEmpty(slot));
        }
        self.repo.save(token, &profile)?;
        Ok(profile)
    }

    // ========================================================================
    // Fights
    // ========================================================================

    /// Bestiary entries the gladiator has unlocked.
    pub fn enemies_for(
        &self,
        token: &PlayerToken,
    ) -> Result<Vec<arena_content::EnemyTemplate>, RuntimeError> {
        let profile = self.gladiator(token)?;
        Ok(self
            .enemies
            .unlocked_at(profile.progression.level)
            .cloned()
            .collect())
    }

    /// Start a fight with a random RNG seed.
    pub fn start_fight(
        &self,
        token: &PlayerToken,
        spec: OpponentSpec,
    ) -> Result<SessionSnapshot, RuntimeError> {
        self.start_fight_seeded(token, spec, rand::thread_rng().r#gen())
    }

    /// Start a fight with an explicit RNG seed (replayable).
    ///
    /// The gladiator enters at full health per the engine's caller
    /// convention; the healed state is persisted before the first round.
    pub fn start_fight_seeded(
        &self,
        token: &PlayerToken,
        spec: OpponentSpec,
        seed: u64,
    ) -> Result<SessionSnapshot, RuntimeError> {
        let mut profile = self.gladiator(token)?;
        if self.registry.has_fight(token) {
            return Err(RuntimeError::FightInProgress);
        }

        let (opponent, difficulty) = self.build_opponent(&profile, &spec)?;

        profile.heal_full();
        self.repo.save(token, &profile)?;

        let player = profile.combatant(&self.items)?;
        let session = EncounterSession::new(player, opponent);
        let snapshot = session.snapshot();
        self.registry
            .begin(token, ActiveFight::new(session, difficulty, seed))?;

        info!(
            player = %token,
            opponent = %snapshot.opponent_name,
            %difficulty,
            seed,
            "fight started"
        );
        Ok(snapshot)
    }

    /// Resolve the next round of the token's active fight.
    ///
    /// The gladiator's health is persisted after every round so a crash
    /// never loses more than the round in flight.
    pub fn resolve_round(&self, token: &PlayerToken) -> Result<RoundOutcome, RuntimeError> {
        let (outcome, player_health) = self.registry.with_fight(token, |fight| {
            let outcome = CombatEngine::new(&mut fight.session).resolve_round(&mut fight.rng)?;
            Ok((outcome, fight.session.player().current_health()))
        })?;

        let mut profile = self.gladiator(token)?;
        profile.current_health = player_health;
        self.repo.save(token, &profile)?;

        debug!(
            player = %token,
            round = outcome.round,
            winner = ?outcome.winner,
            "round resolved"
        );
        Ok(outcome)
    }

    /// Read-only view of the active fight.
    pub fn fight_snapshot(&self, token: &PlayerToken) -> Result<SessionSnapshot, RuntimeError> {
        self.registry
            .with_fight(token, |fight| Ok(fight.session.snapshot()))
    }

    /// Conclude a decided fight: pay out rewards, update the record,
    /// persist, and drop the session.
    pub fn finish_fight(&self, token: &PlayerToken) -> Result<FightReport, RuntimeError> {
        let decided = self
            .registry
            .with_fight(token, |fight| Ok(fight.session.is_terminal()))?;
        if !decided {
            return Err(RuntimeError::FightUndecided);
        }

        let fight = self.registry.end(token)?;
        let difficulty = fight.difficulty;
        let mut battle_log = fight.session.action_log().to_vec();
        let (player, _opponent, winner) = fight.session.into_parts();

        let mut profile = self.gladiator(token)?;
        profile.current_health = player.current_health();

        let report = match winner {
            Some(Winner::Player) => {
                let rewards = FightRewards::for_difficulty(difficulty);
                let gain = profile.progression.apply_experience(rewards.experience);
                profile.progression.gold += rewards.gold;
                profile.progression.record_win();
                battle_log.push(format!(
                    "You earned {} gold and {} experience!",
                    rewards.gold, rewards.experience
                ));
                FightReport {
                    result: FightResult::Victory,
                    rewards: Some(rewards),
                    experience: Some(gain),
                    battle_log,
                    profile: profile.clone(),
                }
            }
            Some(Winner::Opponent) | None => {
                profile.progression.record_loss();
                FightReport {
                    result: FightResult::Defeat,
                    rewards: None,
                    experience: None,
                    battle_log,
                    profile: profile.clone(),
                }
            }
        };

        self.repo.save(token, &profile)?;
        info!(
            player = %token,
            result = %report.result,
            wins = profile.progression.wins,
            losses = profile.progression.losses,
            "fight finished"
        );
        Ok(report)
    }

    /// Walk away from an active fight. No rewards, no record change;
    /// the session is simply destroyed.
    pub fn abandon_fight(&self, token: &PlayerToken) -> Result<(), RuntimeError> {
        let fight = self.registry.end(token)?;
        info!(player = %token, round = fight.session.round(), "fight abandoned");
        Ok(())
    }

    /// Build the opponent combatant and note the difficulty tier that
    /// determines the payout.
    fn build_opponent(
        &self,
        profile: &GladiatorProfile,
        spec: &OpponentSpec,
    ) -> Result<(Combatant, Difficulty), RuntimeError> {
        match spec {
            OpponentSpec::Enemy(name) => {
                let template = self
                    .enemies
                    .get(name)
                    .ok_or_else(|| RuntimeError::UnknownEnemy(name.clone()))?;
                if template.min_level > profile.progression.level {
                    return Err(RuntimeError::EnemyLocked {
                        name: template.name.clone(),
                        required: template.min_level,
                    });
                }
                Ok((template.to_combatant()?, Difficulty::Normal))
            }
            OpponentSpec::Scaled { race, difficulty } => {
                Ok((self.scaled_opponent(race, *difficulty)?, *difficulty))
            }
            OpponentSpec::Random => {
                let mut rng = rand::thread_rng();
                let race_names: Vec<&str> = self.races.names().collect();
                let race = race_names[rng.gen_range(0..race_names.len())].to_owned();
                let difficulty = [Difficulty::Weak, Difficulty::Normal, Difficulty::Strong]
                    [rng.gen_range(0..3)];
                Ok((self.scaled_opponent(&race, difficulty)?, difficulty))
            }
        }
    }

    fn scaled_opponent(
        &self,
        race: &str,
        difficulty: Difficulty,
    ) -> Result<Combatant, RuntimeError> {
        let race_def = self
            .races
            .get(race)
            .ok_or_else(|| RuntimeError::UnknownRace(race.to_owned()))?;
        let mut attributes = race_def.starting_attributes();
        difficulty.scale(&mut attributes);

        let name = match difficulty {
            Difficulty::Normal => race_def.name.clone(),
            _ => format!("{difficulty} {}", race_def.name),
        };
        Ok(Combatant::new(name, race_def.name.clone(), Origin::Enemy, attributes)?)
    }
}
