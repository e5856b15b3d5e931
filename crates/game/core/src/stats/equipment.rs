//! Equipment aggregation - defenses and initiative modifier from gear.
//!
//! ```text
//! base_def = martial armor     → armor.def
//!            non-martial armor → armor.def + DEX(current)
//!            no armor          → DEX(current)
//! def      = base_def + Σ def(shields, accessories) + def.bonus
//! mdef     = INS(current) + Σ mdef(equipped non-weapons) + mdef.bonus
//! init_mod = Σ init(equipped armor, shields, accessories)
//! ```
//!
//! Weapons never contribute to defenses or initiative.

use super::attributes::{AttributeKind, Attributes};
use crate::state::{Derived, Item, ItemKind};

/// Defense values computed from equipped gear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defenses {
    pub def: i32,
    pub mdef: i32,
    /// Initiative modifier from armor, shields and accessories.
    pub init_mod: i32,
}

/// Per-slot sums over the equipped items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Contributions {
    /// `(def, martial)` of the first equipped armor.
    armor: Option<(i32, bool)>,
    other_def: i32,
    mdef: i32,
    init: i32,
}

impl Contributions {
    fn collect<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut sums = Self::default();
        for item in items.into_iter().filter(|item| item.equipped) {
            match &item.kind {
                ItemKind::Armor(armor) => {
                    if sums.armor.is_none() {
                        sums.armor = Some((armor.protection.def(), armor.martial));
                    } else {
                        tracing::warn!(
                            "'{}' ignored for base defense: another armor is equipped",
                            item.name
                        );
                    }
                    sums.mdef += armor.protection.mdef();
                    sums.init += armor.protection.init();
                }
                ItemKind::Shield(protection) | ItemKind::Accessory(protection) => {
                    sums.other_def += protection.def();
                    sums.mdef += protection.mdef();
                    sums.init += protection.init();
                }
                ItemKind::Weapon(_)
                | ItemKind::Class(_)
                | ItemKind::Skill(_)
                | ItemKind::Spell(_)
                | ItemKind::MiscAbility(_)
                | ItemKind::Behavior(_)
                | ItemKind::Consumable => {}
            }
        }
        sums
    }
}

/// Compute defenses from equipped items and post-clamp attributes.
///
/// `attributes` must already carry current values (Dexterity for base
/// defense, Insight for magic defense).
pub fn aggregate_equipment(items: &[Item], attributes: &Attributes, derived: &Derived) -> Defenses {
    let sums = Contributions::collect(items);
    let dex = attributes.current(AttributeKind::Dexterity);
    let ins = attributes.current(AttributeKind::Insight);

    let base_def = match sums.armor {
        Some((def, true)) => def,
        Some((def, false)) => def + dex,
        None => dex,
    };

    Defenses {
        def: base_def + sums.other_def + derived.def.bonus,
        mdef: ins + sums.mdef + derived.mdef.bonus,
        init_mod: sums.init,
    }
}
