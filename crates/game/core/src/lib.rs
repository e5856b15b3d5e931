//! Deterministic rules engine for a tactical tabletop RPG.
//!
//! `fabula-core` computes derived combat statistics (attributes, resources,
//! defenses, initiative) from an actor's stored data and resolves dice-based
//! checks into structured results. It never formats markup and performs no
//! I/O; every random draw goes through [`DiceSource`].
pub mod behavior;
pub mod check;
pub mod combo;
pub mod config;
pub mod dice;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use behavior::{BehaviorRoll, roll_behavior};
pub use check::{
    CheckError, CheckRequest, DamageOutcome, DamageRequest, DieCheckResult, InitiativeRoll,
    ItemCheck, ItemResolution, evaluate_check, resolve_item, resolve_named, roll_check,
    roll_initiative,
};
pub use combo::{
    AlchemyRequest, AlchemyRoll, AlchemyTier, ComboKey, ComboOutcome, enumerate_outcomes,
    roll_alchemy,
};
pub use config::RulesConfig;
pub use dice::{DiceSource, PcgDice, ScriptedDice};
pub use env::Ruleset;
pub use error::{ErrorSeverity, RulesError};
pub use state::{
    Ability, AbilityDamage, Actor, ActorKind, ArmorData, AttributePair, BehaviorData,
    ClassBenefits, Derived, DerivedValue, Hands, Item, ItemId, ItemKind, Protection, Rank,
    ResourceMeter, Resources, RollInfo, SpellInfo, UseWeapon, WeaponData, WeaponSummary,
};
pub use stats::{
    ActiveStatuses, AttributeKind, Attributes, DerivedSnapshot, StatusCatalog, StatusDefinition,
    hp_change,
};
