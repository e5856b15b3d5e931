//! Resources - maximum HP, MP and IP.
//!
//! Resource pools are partially stored:
//! - Maximum values: computed here (NOT stored as input)
//! - Current values and manual bonuses: game state
//!
//! Formulas (MIG/WLP use **base** values so temporary statuses never shrink
//! a pool):
//! - HP_max = (MIG × 5 + LevelVal + 5 × classes[HP] + hp.bonus) × HpMult
//! - MP_max = (WLP × 5 + Level + 5 × classes[MP] + mp.bonus) × MpMult
//! - IP_max = 6 + 2 × classes[IP]            (characters only)
//!
//! LevelVal is Level for characters and Level × 2 for NPCs.

use super::attributes::{AttributeKind, Attributes};
use crate::config::RulesConfig;
use crate::state::{ActorKind, ClassBenefits, Item, ItemKind, Rank, Resources};

/// Enum representing individual resource types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    /// Hit points.
    Hp,
    /// Mind points.
    Mp,
    /// Inventory points.
    Ip,
}

/// Maximum resource values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMaximums {
    pub hp_max: i32,
    pub mp_max: i32,
    /// `None` for NPCs, whose IP is not managed by the rules.
    pub ip_max: Option<i32>,
}

impl ResourceMaximums {
    pub fn get(&self, resource: ResourceKind) -> Option<i32> {
        match resource {
            ResourceKind::Hp => Some(self.hp_max),
            ResourceKind::Mp => Some(self.mp_max),
            ResourceKind::Ip => self.ip_max,
        }
    }
}

/// Number of owned classes granting each resource benefit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassBenefitCounts {
    pub hp: i32,
    pub mp: i32,
    pub ip: i32,
}

impl ClassBenefitCounts {
    /// Count benefits over owned (not necessarily equipped) class items.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut counts = Self::default();
        for item in items {
            let benefits = match &item.kind {
                ItemKind::Class(benefits) => *benefits,
                ItemKind::Weapon(_)
                | ItemKind::Armor(_)
                | ItemKind::Shield(_)
                | ItemKind::Accessory(_)
                | ItemKind::Skill(_)
                | ItemKind::Spell(_)
                | ItemKind::MiscAbility(_)
                | ItemKind::Behavior(_)
                | ItemKind::Consumable => continue,
            };
            counts.hp += i32::from(benefits.contains(ClassBenefits::HP));
            counts.mp += i32::from(benefits.contains(ClassBenefits::MP));
            counts.ip += i32::from(benefits.contains(ClassBenefits::IP));
        }
        counts
    }
}

/// Everything the resource formulas read.
#[derive(Clone, Copy, Debug)]
pub struct ResourceInputs<'a> {
    pub kind: ActorKind,
    pub level: i32,
    pub rank: Rank,
    pub attributes: &'a Attributes,
    pub classes: ClassBenefitCounts,
    pub resources: &'a Resources,
}

/// HP multiplier: champion n, elite 2, otherwise 1 (characters always 1).
pub fn hp_multiplier(kind: ActorKind, rank: Rank, config: &RulesConfig) -> i32 {
    match (kind, rank.normalized()) {
        (ActorKind::Character, _) => 1,
        (ActorKind::Npc, Rank::Champion(n)) => champion_factor(n),
        (ActorKind::Npc, Rank::Elite) => config.elite_multiplier,
        (ActorKind::Npc, Rank::Normal) => 1,
    }
}

/// Champion multiplier as `i32`, saturating instead of wrapping.
pub(crate) fn champion_factor(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// MP multiplier: flat 2 for champions regardless of n; elites get none.
pub fn mp_multiplier(kind: ActorKind, rank: Rank, config: &RulesConfig) -> i32 {
    match (kind, rank.normalized()) {
        (ActorKind::Npc, Rank::Champion(_)) => config.champion_mp_multiplier,
        _ => 1,
    }
}

/// Compute maximum HP/MP/IP.
///
/// Arithmetic saturates at the `i32` bounds.
pub fn compute_resources(inputs: &ResourceInputs<'_>, config: &RulesConfig) -> ResourceMaximums {
    let might = inputs.attributes.base(AttributeKind::Might);
    let willpower = inputs.attributes.base(AttributeKind::Willpower);
    let level_val = match inputs.kind {
        ActorKind::Npc => inputs.level.saturating_mul(2),
        ActorKind::Character => inputs.level,
    };
    let per_class = config.class_resource_bonus;

    let hp_max = pool(might, level_val, per_class, inputs.classes.hp, inputs.resources.hp.bonus)
        .saturating_mul(hp_multiplier(inputs.kind, inputs.rank, config));
    let mp_max = pool(willpower, inputs.level, per_class, inputs.classes.mp, inputs.resources.mp.bonus)
        .saturating_mul(mp_multiplier(inputs.kind, inputs.rank, config));
    let ip_max = match inputs.kind {
        ActorKind::Character => Some(
            config
                .class_inventory_bonus
                .saturating_mul(inputs.classes.ip)
                .saturating_add(config.base_inventory_points),
        ),
        ActorKind::Npc => None,
    };

    ResourceMaximums {
        hp_max,
        mp_max,
        ip_max,
    }
}

/// `attribute × 5 + level + per_class × classes + bonus`, before the rank multiplier.
fn pool(attribute: i32, level: i32, per_class: i32, classes: i32, bonus: i32) -> i32 {
    attribute
        .saturating_mul(5)
        .saturating_add(level)
        .saturating_add(per_class.saturating_mul(classes))
        .saturating_add(bonus)
}

/// Damage taken by an HP update, for floating combat text.
///
/// Returns `previous - next` (positive for damage, negative for healing),
/// or `None` when HP did not change or the same update changed the level
/// (levelling up resets HP and is not damage).
pub fn hp_change(previous: i32, next: i32, level_changed: bool) -> Option<i32> {
    let taken = previous - next;
    (taken != 0 && !level_changed).then_some(taken)
}
