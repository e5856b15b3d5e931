//! Stored game data: actors and the items they own.
//!
//! These types carry the inputs of the rules (base values, bonuses,
//! equipment, statuses) and the fields the pipeline writes back.
mod actor;
mod item;

pub use actor::{
    Actor, ActorKind, Derived, DerivedValue, Rank, ResourceMeter, Resources,
};
pub use item::{
    Ability, AbilityDamage, ArmorData, AttributePair, BehaviorData, ClassBenefits, Hands, Item,
    ItemId, ItemKind, Protection, RollInfo, SpellInfo, UseWeapon, WeaponData, WeaponSummary,
};
