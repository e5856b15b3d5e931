//! Item check resolution.
//!
//! Turns an owned item into zero or more two-die checks:
//!
//! ```text
//! Weapon                      → 1 check   (weapon pair, accuracy, damage)
//! Ability, own roll           → 1 check   (ability pair, accuracy, damage?)
//! Ability through weapons     → 1 check per equipped weapon
//!                               (weapon stats + ability accuracy/damage)
//! Ability without a roll      → 0 checks
//! Anything else               → NotRollable
//! ```
//!
//! Resolution is two-phase: every check is planned and validated first, then
//! the dice are drawn. A failing plan consumes no dice.

use crate::config::RulesConfig;
use crate::dice::DiceSource;
use crate::state::{
    Ability, Actor, AttributePair, Item, ItemKind, RollInfo, SpellInfo, WeaponData, WeaponSummary,
};

use super::die::{CheckRequest, DamageRequest, DieCheckResult, roll_check};
use super::error::CheckError;

/// One resolved check of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCheck {
    /// Weapon the check was rolled through, for abilities that borrow
    /// weapon stats.
    pub weapon: Option<String>,
    pub attributes: AttributePair,
    /// Accuracy of the rolled item.
    pub accuracy: i32,
    /// Accuracy an ability adds on top of a weapon's.
    pub bonus_accuracy: i32,
    pub result: DieCheckResult,
}

/// Full outcome of resolving an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemResolution {
    pub item: String,
    pub item_type: &'static str,
    /// Whether the result is announced with a title card.
    pub announces: bool,
    pub weapon: Option<WeaponSummary>,
    pub spell: Option<SpellInfo>,
    pub checks: Vec<ItemCheck>,
}

/// A validated check that has not been rolled yet.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PlannedCheck {
    weapon: Option<String>,
    attributes: AttributePair,
    accuracy: i32,
    bonus_accuracy: i32,
    request: CheckRequest,
}

/// Bonuses an ability adds when rolled through a weapon.
#[derive(Clone, Copy, Debug, Default)]
struct WeaponBonus {
    accuracy: i32,
    damage: i32,
    hr_zero: bool,
}

/// Resolve the item called `name` owned by `actor`.
pub fn resolve_named(
    actor: &Actor,
    name: &str,
    dice: &mut (impl DiceSource + ?Sized),
    config: &RulesConfig,
) -> Result<ItemResolution, CheckError> {
    let item = actor
        .item_by_name(name)
        .ok_or_else(|| CheckError::ItemNotFound(name.to_owned()))?;
    resolve_item(actor, item, dice, config)
}

/// Resolve `item` for `actor`, drawing dice only after every check validates.
///
/// Attribute dice use the actor's current values, so the actor should be
/// recomputed first.
pub fn resolve_item(
    actor: &Actor,
    item: &Item,
    dice: &mut (impl DiceSource + ?Sized),
    config: &RulesConfig,
) -> Result<ItemResolution, CheckError> {
    let planned = plan_checks(actor, item)?;

    let checks = planned
        .into_iter()
        .map(|plan| ItemCheck {
            result: roll_check(&plan.request, &mut *dice, config),
            weapon: plan.weapon,
            attributes: plan.attributes,
            accuracy: plan.accuracy,
            bonus_accuracy: plan.bonus_accuracy,
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        actor = %actor.name,
        item = %item.name,
        checks = checks.len(),
        "item resolved"
    );

    Ok(ItemResolution {
        item: item.name.clone(),
        item_type: item.type_label(),
        announces: item.announces(),
        weapon: item.as_weapon().map(WeaponData::summary),
        spell: match &item.kind {
            ItemKind::Spell(ability) => ability.spell.clone(),
            _ => None,
        },
        checks,
    })
}

fn plan_checks(actor: &Actor, item: &Item) -> Result<Vec<PlannedCheck>, CheckError> {
    match &item.kind {
        ItemKind::Weapon(weapon) => Ok(vec![plan_weapon_check(
            actor,
            &item.name,
            weapon,
            WeaponBonus::default(),
            false,
        )?]),
        ItemKind::Skill(ability) | ItemKind::Spell(ability) | ItemKind::MiscAbility(ability) => {
            plan_ability_checks(actor, &item.name, ability)
        }
        ItemKind::Armor(_)
        | ItemKind::Shield(_)
        | ItemKind::Accessory(_)
        | ItemKind::Class(_)
        | ItemKind::Behavior(_)
        | ItemKind::Consumable => Err(CheckError::NotRollable {
            item: item.name.clone(),
            kind: item.type_label().to_owned(),
        }),
    }
}

fn plan_ability_checks(
    actor: &Actor,
    name: &str,
    ability: &Ability,
) -> Result<Vec<PlannedCheck>, CheckError> {
    if !ability.has_roll {
        return Ok(Vec::new());
    }
    let roll = ability
        .roll
        .as_ref()
        .ok_or_else(|| CheckError::MissingRollInfo {
            item: name.to_owned(),
        })?;

    if roll.uses_weapons() {
        let bonus = WeaponBonus {
            accuracy: roll.accuracy,
            damage: roll.damage_value(),
            hr_zero: roll.use_weapon.hr_zero,
        };
        return actor
            .equipped_items()
            .filter_map(|item| item.as_weapon().map(|weapon| (item, weapon)))
            .map(|(item, weapon)| plan_weapon_check(actor, &item.name, weapon, bonus, true))
            .collect();
    }

    plan_own_roll(actor, name, roll).map(|plan| vec![plan])
}

fn plan_own_roll(actor: &Actor, name: &str, roll: &RollInfo) -> Result<PlannedCheck, CheckError> {
    let attributes = roll
        .attributes
        .ok_or_else(|| CheckError::MissingAttributes {
            item: name.to_owned(),
        })?;

    let mut request = CheckRequest::new(
        actor.attributes.current(attributes.primary),
        actor.attributes.current(attributes.secondary),
        roll.accuracy,
    )?
    .with_hr_zero(roll.use_weapon.hr_zero);
    if let Some(damage) = &roll.damage {
        request = request.with_damage(DamageRequest {
            base: damage.value,
            bonus: 0,
            kind: damage.kind.clone(),
        });
    }

    Ok(PlannedCheck {
        weapon: None,
        attributes,
        accuracy: roll.accuracy,
        bonus_accuracy: 0,
        request,
    })
}

fn plan_weapon_check(
    actor: &Actor,
    name: &str,
    weapon: &WeaponData,
    bonus: WeaponBonus,
    borrowed: bool,
) -> Result<PlannedCheck, CheckError> {
    let attributes = weapon
        .attributes
        .ok_or_else(|| CheckError::MissingAttributes {
            item: name.to_owned(),
        })?;

    let request = CheckRequest::new(
        actor.attributes.current(attributes.primary),
        actor.attributes.current(attributes.secondary),
        weapon.accuracy + bonus.accuracy,
    )?
    .with_damage(DamageRequest {
        base: weapon.damage,
        bonus: bonus.damage,
        kind: weapon.damage_type.clone(),
    })
    .with_hr_zero(bonus.hr_zero);

    Ok(PlannedCheck {
        weapon: borrowed.then(|| name.to_owned()),
        attributes,
        accuracy: weapon.accuracy,
        bonus_accuracy: bonus.accuracy,
        request,
    })
}
