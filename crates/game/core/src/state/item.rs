//! Owned items: equipment, classes, abilities, behaviors and consumables.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the common fields (id, name, equipped flag)
//! - [`ItemKind`] holds the type-specific payload
//!
//! The rules only ever read items; they never change an item's identity.

use bitflags::bitflags;

use crate::stats::AttributeKind;

/// Identifier of an item within its owner's collection.
pub type ItemId = u32;

/// An item owned by an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: bool,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            equipped: false,
            kind,
        }
    }

    /// Builder: mark the item as equipped.
    #[must_use]
    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }

    /// Defensive contributions of armor, shields and accessories.
    pub fn protection(&self) -> Option<&Protection> {
        match &self.kind {
            ItemKind::Armor(armor) => Some(&armor.protection),
            ItemKind::Shield(protection) | ItemKind::Accessory(protection) => Some(protection),
            ItemKind::Weapon(_)
            | ItemKind::Class(_)
            | ItemKind::Skill(_)
            | ItemKind::Spell(_)
            | ItemKind::MiscAbility(_)
            | ItemKind::Behavior(_)
            | ItemKind::Consumable => None,
        }
    }

    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_ability(&self) -> Option<&Ability> {
        match &self.kind {
            ItemKind::Skill(ability) | ItemKind::Spell(ability) | ItemKind::MiscAbility(ability) => {
                Some(ability)
            }
            _ => None,
        }
    }

    /// Whether resolving this item shows a title card to every player.
    ///
    /// Weapons, spells and consumables always do; other abilities only when
    /// flagged.
    pub fn announces(&self) -> bool {
        match &self.kind {
            ItemKind::Weapon(_) | ItemKind::Spell(_) | ItemKind::Consumable => true,
            ItemKind::Skill(ability) | ItemKind::MiscAbility(ability) => ability.show_title_card,
            ItemKind::Armor(_)
            | ItemKind::Shield(_)
            | ItemKind::Accessory(_)
            | ItemKind::Class(_)
            | ItemKind::Behavior(_) => false,
        }
    }

    /// Lower-case type label used in check breakdowns (`weapon`, `spell`, ...).
    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(WeaponData),
    Armor(ArmorData),
    Shield(Protection),
    Accessory(Protection),
    Class(ClassBenefits),
    Skill(Ability),
    Spell(Ability),
    MiscAbility(Ability),
    Behavior(BehaviorData),
    Consumable,
}

impl ItemKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weapon(_) => "weapon",
            Self::Armor(_) => "armor",
            Self::Shield(_) => "shield",
            Self::Accessory(_) => "accessory",
            Self::Class(_) => "class",
            Self::Skill(_) => "skill",
            Self::Spell(_) => "spell",
            Self::MiscAbility(_) => "miscAbility",
            Self::Behavior(_) => "behavior",
            Self::Consumable => "consumable",
        }
    }
}

/// The two attributes whose dice a check rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributePair {
    pub primary: AttributeKind,
    pub secondary: AttributeKind,
}

impl AttributePair {
    pub const fn new(primary: AttributeKind, secondary: AttributeKind) -> Self {
        Self { primary, secondary }
    }
}

/// How many hands a weapon needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hands {
    #[default]
    OneHanded,
    TwoHanded,
}

impl Hands {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneHanded => "One-handed",
            Self::TwoHanded => "Two-handed",
        }
    }
}

/// Weapon-specific data.
///
/// `attributes` is optional in data files; a weapon without it cannot be
/// rolled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub attributes: Option<AttributePair>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accuracy: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: i32,
    pub damage_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub martial: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hands: Hands,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quality: Option<String>,
}

/// Defensive contributions of an equippable item.
///
/// Missing values contribute zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protection {
    #[cfg_attr(feature = "serde", serde(default))]
    pub def: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mdef: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub init: Option<i32>,
}

impl Protection {
    pub const fn new(def: i32, mdef: i32, init: i32) -> Self {
        Self {
            def: Some(def),
            mdef: Some(mdef),
            init: Some(init),
        }
    }

    pub fn def(&self) -> i32 {
        self.def.unwrap_or(0)
    }

    pub fn mdef(&self) -> i32 {
        self.mdef.unwrap_or(0)
    }

    pub fn init(&self) -> i32 {
        self.init.unwrap_or(0)
    }
}

/// Armor: protection plus the martial flag.
///
/// Martial armor replaces the wearer's Dexterity as base defense; other
/// armor adds to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub protection: Protection,
    #[cfg_attr(feature = "serde", serde(default))]
    pub martial: bool,
}

bitflags! {
    /// Resource benefits granted by a class.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ClassBenefits: u8 {
        const HP = 1 << 0;
        const MP = 1 << 1;
        const IP = 1 << 2;
    }
}

/// Spell, skill or miscellaneous ability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ability {
    /// Whether activating the ability rolls a check.
    pub has_roll: bool,
    pub roll: Option<RollInfo>,
    /// Spell-only descriptive data.
    pub spell: Option<SpellInfo>,
    pub show_title_card: bool,
}

/// Roll parameters of an ability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RollInfo {
    pub use_weapon: UseWeapon,
    pub attributes: Option<AttributePair>,
    pub accuracy: i32,
    pub damage: Option<AbilityDamage>,
}

impl RollInfo {
    /// Whether the ability rolls with each equipped weapon instead of its own pair.
    pub fn uses_weapons(&self) -> bool {
        self.use_weapon.accuracy || self.use_weapon.damage
    }

    /// Flat damage the ability adds, zero when it deals none.
    pub fn damage_value(&self) -> i32 {
        self.damage.as_ref().map_or(0, |d| d.value)
    }
}

/// Weapon usage flags of an ability's roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UseWeapon {
    pub accuracy: bool,
    pub damage: bool,
    /// Treat the high roll as zero when computing damage.
    pub hr_zero: bool,
}

/// Damage dealt by an ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDamage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: i32,
    pub kind: String,
}

/// Descriptive spell data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellInfo {
    pub mp_cost: String,
    pub target: String,
    pub duration: String,
}

/// NPC behavior entry; heavier behaviors are picked more often.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorData {
    pub weight: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// Structured display data of a weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeaponSummary {
    pub attributes: Option<AttributePair>,
    /// Accuracy bonus, omitted when not positive.
    pub accuracy: Option<i32>,
    pub damage: i32,
    pub damage_type: String,
    pub hands: Hands,
    pub category: String,
    pub quality: String,
}

impl WeaponData {
    /// Quality text shown when a weapon has none.
    pub const NO_QUALITY: &'static str = "No Quality.";

    pub fn summary(&self) -> WeaponSummary {
        WeaponSummary {
            attributes: self.attributes,
            accuracy: (self.accuracy > 0).then_some(self.accuracy),
            damage: self.damage,
            damage_type: self.damage_type.clone(),
            hands: self.hands,
            category: self.category.clone(),
            quality: self
                .quality
                .clone()
                .filter(|q| !q.is_empty())
                .unwrap_or_else(|| Self::NO_QUALITY.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> WeaponData {
        WeaponData {
            attributes: Some(AttributePair::new(
                AttributeKind::Might,
                AttributeKind::Dexterity,
            )),
            accuracy: 0,
            damage: 6,
            damage_type: "physical".into(),
            martial: true,
            hands: Hands::OneHanded,
            category: "Sword".into(),
            quality: None,
        }
    }

    #[test]
    fn protection_only_for_defensive_items() {
        let shield = Item::new(1, "Buckler", ItemKind::Shield(Protection::new(1, 0, 0)));
        let weapon = Item::new(2, "Sword", ItemKind::Weapon(sword()));
        assert_eq!(shield.protection().map(Protection::def), Some(1));
        assert!(weapon.protection().is_none());
    }

    #[test]
    fn missing_contributions_default_to_zero() {
        let protection = Protection {
            def: Some(2),
            mdef: None,
            init: None,
        };
        assert_eq!(protection.def(), 2);
        assert_eq!(protection.mdef(), 0);
        assert_eq!(protection.init(), 0);
    }

    #[test]
    fn announcement_policy() {
        let spell = Item::new(1, "Fulgur", ItemKind::Spell(Ability::default()));
        let quiet_skill = Item::new(2, "Focus", ItemKind::Skill(Ability::default()));
        let loud_skill = Item::new(
            3,
            "Counter",
            ItemKind::Skill(Ability {
                show_title_card: true,
                ..Ability::default()
            }),
        );
        let armor = Item::new(4, "Silk Shirt", ItemKind::Armor(ArmorData::default()));
        assert!(spell.announces());
        assert!(!quiet_skill.announces());
        assert!(loud_skill.announces());
        assert!(!armor.announces());
        assert!(Item::new(5, "Elixir", ItemKind::Consumable).announces());
    }

    #[test]
    fn weapon_summary_fills_quality() {
        let summary = sword().summary();
        assert_eq!(summary.quality, WeaponData::NO_QUALITY);
        assert_eq!(summary.accuracy, None);

        let mut precise = sword();
        precise.accuracy = 1;
        precise.quality = Some("Multi (2).".into());
        let summary = precise.summary();
        assert_eq!(summary.accuracy, Some(1));
        assert_eq!(summary.quality, "Multi (2).");
    }

    #[test]
    fn class_benefit_flags() {
        let benefits = ClassBenefits::HP | ClassBenefits::IP;
        assert!(benefits.contains(ClassBenefits::HP));
        assert!(!benefits.contains(ClassBenefits::MP));
    }
}
