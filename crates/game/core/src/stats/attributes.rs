//! Attributes - first layer of the stat pipeline.
//!
//! The four attributes (Might, Dexterity, Insight, Willpower) are stored as
//! `base` values and are the only permanently stored stats besides level.
//! `current` is derived: base plus every active status modifier, clamped to
//! the die-size range.
//!
//! Current = clamp(Base + Σ status modifiers, min, max)

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::status::{ActiveStatuses, StatusCatalog};
use crate::config::RulesConfig;

/// The four attributes of a combatant.
///
/// An attribute's current value doubles as the die size it rolls (d6..d12).
/// - **MIG** (Might): physical power, hit points
/// - **DEX** (Dexterity): agility, base defense
/// - **INS** (Insight): perception, magic defense
/// - **WLP** (Willpower): resolve, mind points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    #[strum(serialize = "mig")]
    #[cfg_attr(feature = "serde", serde(rename = "mig"))]
    Might,
    #[strum(serialize = "dex")]
    #[cfg_attr(feature = "serde", serde(rename = "dex"))]
    Dexterity,
    #[strum(serialize = "ins")]
    #[cfg_attr(feature = "serde", serde(rename = "ins"))]
    Insight,
    #[strum(serialize = "wlp")]
    #[cfg_attr(feature = "serde", serde(rename = "wlp"))]
    Willpower,
}

impl AttributeKind {
    /// Every attribute, in sheet order.
    pub const ALL: [Self; 4] = [Self::Might, Self::Dexterity, Self::Insight, Self::Willpower];

    /// Lower-case key used in data files (`mig`, `dex`, `ins`, `wlp`).
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Upper-case abbreviation shown next to a die (`MIG`, `DEX`, ...).
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Might => "MIG",
            Self::Dexterity => "DEX",
            Self::Insight => "INS",
            Self::Willpower => "WLP",
        }
    }

    /// Parse a data-file key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.key() == key)
    }
}

/// A single attribute: stored base plus derived current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub base: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current: i32,
}

impl Attribute {
    /// An attribute whose current value equals its base until recomputed.
    pub const fn new(base: i32) -> Self {
        Self {
            base,
            current: base,
        }
    }
}

/// The full attribute block of an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub mig: Attribute,
    pub dex: Attribute,
    pub ins: Attribute,
    pub wlp: Attribute,
}

impl Attributes {
    /// Create an attribute block from base values.
    pub const fn new(mig: i32, dex: i32, ins: i32, wlp: i32) -> Self {
        Self {
            mig: Attribute::new(mig),
            dex: Attribute::new(dex),
            ins: Attribute::new(ins),
            wlp: Attribute::new(wlp),
        }
    }

    pub fn get(&self, kind: AttributeKind) -> &Attribute {
        match kind {
            AttributeKind::Might => &self.mig,
            AttributeKind::Dexterity => &self.dex,
            AttributeKind::Insight => &self.ins,
            AttributeKind::Willpower => &self.wlp,
        }
    }

    pub fn get_mut(&mut self, kind: AttributeKind) -> &mut Attribute {
        match kind {
            AttributeKind::Might => &mut self.mig,
            AttributeKind::Dexterity => &mut self.dex,
            AttributeKind::Insight => &mut self.ins,
            AttributeKind::Willpower => &mut self.wlp,
        }
    }

    /// Current value (die size) of an attribute.
    pub fn current(&self, kind: AttributeKind) -> i32 {
        self.get(kind).current
    }

    /// Stored base value of an attribute.
    pub fn base(&self, kind: AttributeKind) -> i32 {
        self.get(kind).base
    }
}

impl Default for Attributes {
    /// Default attributes: d8 across the board.
    fn default() -> Self {
        Self::new(8, 8, 8, 8)
    }
}

/// Signed modifier accumulated per attribute from active statuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttributeModifiers {
    values: [i32; 4],
}

impl AttributeModifiers {
    fn slot(kind: AttributeKind) -> usize {
        match kind {
            AttributeKind::Might => 0,
            AttributeKind::Dexterity => 1,
            AttributeKind::Insight => 2,
            AttributeKind::Willpower => 3,
        }
    }

    pub fn add(&mut self, kind: AttributeKind, modifier: i32) {
        let slot = &mut self.values[Self::slot(kind)];
        *slot = slot.saturating_add(modifier);
    }

    pub fn get(&self, kind: AttributeKind) -> i32 {
        self.values[Self::slot(kind)]
    }

    /// Sum the modifiers of every active status found in the catalog.
    ///
    /// Statuses missing from the catalog contribute nothing.
    pub fn from_statuses(active: &ActiveStatuses, catalog: &StatusCatalog) -> Self {
        let mut modifiers = Self::default();
        for id in active.iter() {
            match catalog.get(id) {
                Some(definition) => {
                    for kind in definition.affects.iter().copied() {
                        modifiers.add(kind, definition.modifier);
                    }
                }
                None => tracing::debug!("ignoring unknown status '{}'", id),
            }
        }
        modifiers
    }
}

/// Apply status modifiers to base attributes and clamp to the die range.
///
/// Returns a new attribute block; `base` values are carried over untouched.
pub fn clamp_attributes(
    attributes: &Attributes,
    modifiers: &AttributeModifiers,
    config: &RulesConfig,
) -> Attributes {
    let mut result = *attributes;
    for kind in AttributeKind::iter() {
        let attribute = result.get_mut(kind);
        attribute.current = attribute
            .base
            .saturating_add(modifiers.get(kind))
            .clamp(config.attribute_min, config.attribute_max);
    }
    result
}
