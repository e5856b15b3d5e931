//! Check resolution.
//!
//! Checks read the already-derived snapshot stored on an actor and never
//! write back to it. Every random draw goes through a [`DiceSource`].
//!
//! # Core Functions
//!
//! - `roll_check`: one two-die check (total, fumble, critical, damage)
//! - `resolve_item`: every check an owned item produces
//! - `roll_initiative`: 1d(DEX) + 1d(INS) + initiative value
//!
//! [`DiceSource`]: crate::dice::DiceSource

pub mod die;
pub mod error;
pub mod initiative;
pub mod resolve;

pub use die::{
    CheckRequest, DamageOutcome, DamageRequest, DieCheckResult, evaluate_check, roll_check,
};
pub use error::CheckError;
pub use initiative::{InitiativeRoll, roll_initiative};
pub use resolve::{ItemCheck, ItemResolution, resolve_item, resolve_named};
