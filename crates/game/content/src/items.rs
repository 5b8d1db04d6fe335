//! Equipment item catalog.
//!
//! Items carry purely additive stat bonuses; aggregating the bonuses of
//! everything equipped yields the [`StatBonuses`] set that outer layers
//! feed into effective-stat computation. Ownership, slots-in-use, and
//! purchases are tracked by the runtime, not here.

use arena_core::StatBonuses;

/// Identifier of a catalog item.
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Body slot an item occupies when equipped. One item per slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Offhand,
    Head,
    Shoulders,
    Chest,
    Hands,
    Legs,
    Feet,
    Cape,
    Neck,
    Ring,
    Amulet,
    Bracers,
    Ornament,
}

/// Broad item category, for display and filtering.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Armor,
    Shield,
    Accessory,
    Focus,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// One purchasable, equippable item.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub slot: EquipmentSlot,
    pub kind: ItemKind,
    pub rarity: Rarity,
    pub level_requirement: u32,
    pub bonuses: StatBonuses,
    /// Shop price in gold.
    pub value: u32,
    pub description: String,
}

/// Sum the bonuses of a set of items into one additive set.
pub fn aggregate_bonuses<'a>(items: impl IntoIterator<Item = &'a ItemDefinition>) -> StatBonuses {
    items
        .into_iter()
        .fold(StatBonuses::none(), |total, item| {
            total.combine(&item.bonuses)
        })
}

/// Lookup table of all known items.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    /// The built-in armory.
    pub fn builtin() -> Self {
        use EquipmentSlot as Slot;
        use ItemKind as Kind;
        use Rarity::*;

        struct Line(
            u32,
            &'static str,
            Slot,
            Kind,
            Rarity,
            u32,
            StatBonuses,
            u32,
            &'static str,
        );

        let bonus = |strength, dodge, initiative, weaponskill, vitality, stamina| StatBonuses {
            strength,
            dodge,
            initiative,
            weaponskill,
            vitality,
            stamina,
        };

        #[rustfmt::skip]
        let lines = vec![
            // Head armor
            Line(1, "Iron Helmet", Slot::Head, Kind::Armor, Common, 1, bonus(2, 0, 0, 0, 1, 0), 25, "A sturdy iron helmet."),
            Line(2, "Steel Crown", Slot::Head, Kind::Armor, Rare, 5, bonus(5, 1, 0, 0, 3, 0), 150, "A crown forged from fine steel."),
            Line(3, "Warlord's Helm", Slot::Head, Kind::Armor, Epic, 10, bonus(8, 0, 0, 0, 5, 2), 500, "Ancient helm worn by legendary warlords."),
            // Chest armor
            Line(4, "Leather Vest", Slot::Chest, Kind::Armor, Common, 1, bonus(0, 0, 0, 0, 3, 1), 30, "Basic leather protection."),
            Line(5, "Chain Mail", Slot::Chest, Kind::Armor, Rare, 4, bonus(0, 2, 0, 0, 6, 0), 200, "Interlinked metal chains provide good protection."),
            Line(6, "Plate Armor", Slot::Chest, Kind::Armor, Epic, 8, bonus(3, 0, 0, 0, 10, 0), 600, "Full plate armor of the finest quality."),
            // Weapons
            Line(7, "Wooden Sword", Slot::Weapon, Kind::Weapon, Common, 1, bonus(0, 0, 0, 3, 0, 0), 20, "A simple wooden training sword."),
            Line(8, "Iron Blade", Slot::Weapon, Kind::Weapon, Rare, 3, bonus(2, 0, 0, 6, 0, 0), 180, "Well-crafted iron sword."),
            Line(9, "Legendary Sword", Slot::Weapon, Kind::Weapon, Legendary, 12, bonus(5, 0, 3, 12, 0, 0), 1200, "A sword of immense power and history."),
            // Accessories
            Line(10, "Iron Ring", Slot::Ring, Kind::Accessory, Common, 1, bonus(1, 1, 0, 0, 0, 0), 15, "A simple iron ring."),
            Line(11, "Gold Amulet", Slot::Amulet, Kind::Accessory, Rare, 6, bonus(0, 0, 2, 0, 4, 0), 250, "Golden amulet with protective enchantment."),
            Line(12, "Swift Boots", Slot::Feet, Kind::Armor, Rare, 4, bonus(0, 2, 3, 0, 0, 0), 120, "Light boots that enhance speed."),
            Line(13, "Power Gauntlets", Slot::Hands, Kind::Armor, Epic, 7, bonus(6, 0, 0, 3, 0, 0), 400, "Gauntlets that enhance physical power."),
            Line(14, "Mystic Cape", Slot::Cape, Kind::Accessory, Rare, 5, bonus(0, 3, 4, 0, 0, 0), 200, "A cape that seems to shimmer with mystical energy."),
            Line(15, "Guardian Bracers", Slot::Bracers, Kind::Armor, Epic, 6, bonus(0, 2, 0, 0, 5, 0), 350, "Bracers that provide excellent defense."),
            // Offhand
            Line(16, "Wooden Shield", Slot::Offhand, Kind::Shield, Common, 1, bonus(0, 1, 0, 0, 2, 0), 25, "A battered wooden shield."),
            Line(17, "Iron Buckler", Slot::Offhand, Kind::Shield, Rare, 4, bonus(0, 2, 1, 0, 4, 0), 140, "A sturdy buckler for tight defenses."),
            Line(18, "Runed Tome", Slot::Offhand, Kind::Focus, Epic, 8, bonus(0, 0, 3, 2, 0, 0), 380, "Ancient runes hum with power."),
        ];

        Self {
            items: lines
                .into_iter()
                .map(|Line(id, name, slot, kind, rarity, level, bonuses, value, description)| {
                    ItemDefinition {
                        id: ItemId(id),
                        name: name.to_owned(),
                        slot,
                        kind,
                        rarity,
                        level_requirement: level,
                        bonuses,
                        value,
                        description: description.to_owned(),
                    }
                })
                .collect(),
        }
    }

    /// Build a catalog from externally loaded definitions.
    pub fn from_definitions(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn in_slot(&self, slot: EquipmentSlot) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter().filter(move |item| item.slot == slot)
    }

    /// Items purchasable by a gladiator of the given level.
    pub fn available_at_level(&self, level: u32) -> impl Iterator<Item = &ItemDefinition> {
        self.items
            .iter()
            .filter(move |item| item.level_requirement <= level)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
