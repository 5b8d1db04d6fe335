//! Player gladiator profiles.
//!
//! A profile is the persistent record behind a player token: base
//! attributes (racial modifiers already folded in), live health between
//! fights, progression, and the item locker. Equipment bonuses are never
//! written into the base attributes; the effective fighting stats are
//! recomputed from scratch on every query so they can never go stale.

use std::collections::BTreeMap;

use arena_content::{EquipmentSlot, ItemCatalog, ItemId, RaceDefinition, aggregate_bonuses};
use arena_core::{
    Attributes, Combatant, CombatantError, ExperienceGain, Origin, Progression, max_health_for,
};

use crate::error::RuntimeError;

/// Gold a fresh recruit starts with.
const STARTING_GOLD: u32 = 50;

/// Cost and experience yield of one training session.
const TRAINING_COST: u32 = 10;
const TRAINING_XP: i64 = 10;

/// Stat-point spend request, in points per attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatAllocation {
    pub strength: u32,
    pub dodge: u32,
    pub initiative: u32,
    pub weaponskill: u32,
    pub vitality: u32,
    pub stamina: u32,
}

impl StatAllocation {
    pub fn total(&self) -> u32 {
        self.strength + self.dodge + self.initiative + self.weaponskill + self.vitality
            + self.stamina
    }
}

/// Persistent state of one player's gladiator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GladiatorProfile {
    pub name: String,
    pub race: String,
    /// Base attributes: racial modifiers folded in at recruitment, then
    /// mutated only by training and stat allocation.
    pub attributes: Attributes,
    /// Live health carried between fights, bounded by the base max.
    pub current_health: i32,
    pub progression: Progression,
    /// Items owned, equipped or not.
    pub owned_items: Vec<ItemId>,
    /// Currently equipped item per slot.
    pub equipped: BTreeMap<EquipmentSlot, ItemId>,
}

impl GladiatorProfile {
    /// Recruit a fresh gladiator of the given race.
    ///
    /// Racial modifiers are applied here, exactly once. Name validation
    /// is delegated to the combatant constructor so bad profiles cannot
    /// exist at all.
    pub fn recruit(name: impl Into<String>, race: &RaceDefinition) -> Result<Self, CombatantError> {
        let attributes = race.starting_attributes();
        let combatant = Combatant::new(name, race.name.clone(), Origin::Gladiator, attributes)?;

        Ok(Self {
            name: combatant.name().to_owned(),
            race: race.name.clone(),
            attributes,
            current_health: combatant.max_health(),
            progression: Progression::starting(STARTING_GOLD),
            owned_items: Vec::new(),
            equipped: BTreeMap::new(),
        })
    }

    /// Max health from the base attributes (no equipment).
    pub fn max_health(&self) -> i32 {
        max_health_for(self.attributes.vitality)
    }

    /// Restore to full base health.
    pub fn heal_full(&mut self) {
        self.current_health = self.max_health();
    }

    /// Effective attributes with equipment bonuses layered on.
    ///
    /// Recomputed from the catalog on every call; bonuses are never
    /// cached on the profile.
    pub fn effective_attributes(&self, catalog: &ItemCatalog) -> Attributes {
        let equipped = self
            .equipped
            .values()
            .filter_map(|id| catalog.get(*id));
        aggregate_bonuses(equipped).apply(&self.attributes)
    }

    /// Build the fight-ready combatant: effective attributes, persisted
    /// current health (clamped to the effective max).
    pub fn combatant(&self, catalog: &ItemCatalog) -> Result<Combatant, CombatantError> {
        let mut combatant = Combatant::new(
            self.name.clone(),
            self.race.clone(),
            Origin::Gladiator,
            self.effective_attributes(catalog),
        )?;
        combatant.set_current_health(self.current_health);
        Ok(combatant)
    }

    /// One training session: costs gold, bumps the martial stats, fully
    /// heals, and yields a little experience.
    pub fn train(&mut self) -> Result<ExperienceGain, RuntimeError> {
        self.progression.spend_gold(TRAINING_COST)?;

        self.attributes.strength += 1;
        self.attributes.dodge += 1;
        self.attributes.weaponskill += 1;
        self.attributes.vitality += 3;
        self.heal_full();

        Ok(self.progression.apply_experience(TRAINING_XP))
    }

    /// Spend stat points on attributes.
    ///
    /// Vitality points preserve the absolute missing-health gap: current
    /// health rises by exactly the max-health increase.
    pub fn allocate(&mut self, allocation: StatAllocation) -> Result<(), RuntimeError> {
        let total = allocation.total();
        if total == 0 {
            return Err(RuntimeError::EmptyAllocation);
        }
        self.progression.spend_stat_points(total)?;

        self.attributes.strength += allocation.strength as i32;
        self.attributes.dodge += allocation.dodge as i32;
        self.attributes.initiative += allocation.initiative as i32;
        self.attributes.weaponskill += allocation.weaponskill as i32;
        self.attributes.stamina += allocation.stamina as i32;

        if allocation.vitality > 0 {
            let old_max = self.max_health();
            self.attributes.vitality += allocation.vitality as i32;
            self.current_health += self.max_health() - old_max;
        }
        Ok(())
    }

    /// Add a purchased item to the locker.
    pub fn acquire(&mut self, item: ItemId) {
        self.owned_items.push(item);
    }

    pub fn owns(&self, item: ItemId) -> bool {
        self.owned_items.contains(&item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_content::RaceCatalog;

    fn human() -> GladiatorProfile {
        let races = RaceCatalog::builtin();
        GladiatorProfile::recruit("Ragnar", races.get("Human").unwrap()).unwrap()
    }

    #[test]
    fn recruit_starts_at_full_health_with_racial_stats() {
        let profile = human();
        assert_eq!(profile.max_health(), 100);
        assert_eq!(profile.current_health, 100);
        assert_eq!(profile.attributes.weaponskill, 5);
        assert_eq!(profile.progression.level, 1);
        assert_eq!(profile.progression.gold, 50);
    }

    #[test]
    fn training_costs_gold_and_heals() {
        let mut profile = human();
        profile.current_health = 40;
        let before = profile.attributes;

        profile.train().unwrap();

        assert_eq!(profile.progression.gold, 40);
        assert_eq!(profile.attributes.strength, before.strength + 1);
        assert_eq!(profile.attributes.vitality, before.vitality + 3);
        assert_eq!(profile.current_health, profile.max_health());
        assert_eq!(profile.progression.experience, 10);
    }

    #[test]
    fn training_fails_without_gold() {
        let mut profile = human();
        profile.progression.gold = 9;
        assert!(matches!(
            profile.train(),
            Err(RuntimeError::Progression(_))
        ));
    }

    #[test]
    fn vitality_allocation_preserves_missing_health() {
        let mut profile = human();
        profile.progression.stat_points = 20;
        profile.current_health = 60; // gap of 40

        profile
            .allocate(StatAllocation {
                vitality: 4,
                ..StatAllocation::default()
            })
            .unwrap();

        assert_eq!(profile.max_health(), 106);
        assert_eq!(profile.current_health, 66);
        assert_eq!(profile.progression.stat_points, 16);
    }

    #[test]
    fn empty_allocation_rejected() {
        let mut profile = human();
        assert!(matches!(
            profile.allocate(StatAllocation::default()),
            Err(RuntimeError::EmptyAllocation)
        ));
    }

    #[test]
    fn over_allocation_rejected() {
        let mut profile = human();
        profile.progression.stat_points = 3;
        let err = profile
            .allocate(StatAllocation {
                strength: 2,
                dodge: 2,
                ..StatAllocation::default()
            })
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Progression(_)));
    }

    #[test]
    fn equipment_bonuses_never_touch_base_attributes() {
        let catalog = ItemCatalog::builtin();
        let mut profile = human();
        let helmet = ItemId(1); // +2 strength, +1 vitality
        profile.acquire(helmet);
        profile.equipped.insert(EquipmentSlot::Head, helmet);

        let effective = profile.effective_attributes(&catalog);
        assert_eq!(effective.strength, profile.attributes.strength + 2);
        assert_eq!(effective.vitality, profile.attributes.vitality + 1);

        // unequip and the bonus is gone, base untouched
        profile.equipped.clear();
        let plain = profile.effective_attributes(&catalog);
        assert_eq!(plain, profile.attributes);
    }

    #[test]
    fn combatant_carries_persisted_health() {
        let catalog = ItemCatalog::builtin();
        let mut profile = human();
        profile.current_health = 73;
        let combatant = profile.combatant(&catalog).unwrap();
        assert_eq!(combatant.current_health(), 73);
        assert_eq!(combatant.max_health(), 100);
    }
}
