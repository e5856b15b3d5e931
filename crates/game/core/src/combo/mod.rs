//! Alchemy combination outcomes.
//!
//! An alchemy ability rolls 2 to 4 d20s. Every die picks a target band, and
//! every *other* die picks an effect for that target; the enumerator lists all
//! distinct (target, effect) sentences the alchemist may choose from.

pub mod enumerate;
pub mod table;

pub use enumerate::{ComboKey, ComboOutcome, enumerate_outcomes};
pub use table::{EffectCategory, TargetBand, damage_tier};

use crate::config::RulesConfig;
use crate::dice::DiceSource;
use crate::state::{Item, ItemKind};

/// Alchemy tier, named after the ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlchemyTier {
    #[default]
    Basic,
    Advanced,
    Superior,
}

impl AlchemyTier {
    pub const fn dice(self) -> usize {
        match self {
            Self::Basic => 2,
            Self::Advanced => 3,
            Self::Superior => RulesConfig::MAX_ALCHEMY_DICE,
        }
    }
}

/// Parameters of one alchemy roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlchemyRequest {
    pub tier: AlchemyTier,
    pub level: i32,
    /// Drop outcomes that do not suit their target.
    pub trim: bool,
}

impl AlchemyRequest {
    /// Read tier and trimming from an ability name such as
    /// `"Superior Alchemy (all)"`.
    pub fn from_ability_name(name: &str, level: i32) -> Self {
        let tier = if name.contains("Superior") {
            AlchemyTier::Superior
        } else if name.contains("Advanced") {
            AlchemyTier::Advanced
        } else {
            AlchemyTier::Basic
        };
        Self {
            tier,
            level,
            trim: !name.contains("(all)"),
        }
    }

    /// Request for `item` if it is an alchemy ability.
    pub fn for_item(item: &Item, level: i32) -> Option<Self> {
        match &item.kind {
            ItemKind::MiscAbility(_) if item.name.contains("Alchemy") => {
                Some(Self::from_ability_name(&item.name, level))
            }
            _ => None,
        }
    }
}

/// Dice drawn for an alchemy roll and the outcomes they allow.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlchemyRoll {
    pub dice: Vec<u32>,
    pub outcomes: Vec<ComboOutcome>,
}

/// Draw the tier's d20s and enumerate their outcomes.
pub fn roll_alchemy(
    request: &AlchemyRequest,
    dice: &mut (impl DiceSource + ?Sized),
) -> AlchemyRoll {
    let rolled = dice.roll_many(request.tier.dice(), 20);
    let outcomes = enumerate_outcomes(&rolled, request.level, request.trim);
    AlchemyRoll {
        dice: rolled,
        outcomes,
    }
}
