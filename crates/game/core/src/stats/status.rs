//! Status effect catalog and active status sets.
//!
//! Status definitions are static rules data: an identifier, a display label,
//! the attributes it shifts (zero, one or two) and a signed modifier. Purely
//! cosmetic statuses (KO, Regen, ...) carry no attributes and a zero modifier.
//!
//! The catalog is loaded once at startup and passed by reference into the
//! pipeline; it is never mutated afterwards.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use super::attributes::AttributeKind;

/// Most attributes a single status can shift.
pub const MAX_STATUS_ATTRIBUTES: usize = 2;

/// One entry of the status catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusDefinition {
    pub id: String,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub affects: ArrayVec<AttributeKind, MAX_STATUS_ATTRIBUTES>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: i32,
}

impl StatusDefinition {
    /// Create a status shifting `affects` by `modifier`.
    ///
    /// Attributes beyond [`MAX_STATUS_ATTRIBUTES`] are dropped.
    pub fn new(id: &str, label: &str, affects: &[AttributeKind], modifier: i32) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            affects: affects
                .iter()
                .copied()
                .take(MAX_STATUS_ATTRIBUTES)
                .collect(),
            modifier,
        }
    }

    /// Create a status with no mechanical effect.
    pub fn cosmetic(id: &str, label: &str) -> Self {
        Self::new(id, label, &[], 0)
    }

    /// Returns true if this status changes no attribute.
    pub fn is_cosmetic(&self) -> bool {
        self.affects.is_empty() || self.modifier == 0
    }
}

/// Immutable catalog of status definitions, looked up by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusCatalog {
    definitions: Vec<StatusDefinition>,
}

impl StatusCatalog {
    /// Build a catalog. Later duplicates of an id are ignored.
    pub fn new(definitions: impl IntoIterator<Item = StatusDefinition>) -> Self {
        let mut catalog = Self::default();
        for definition in definitions {
            if catalog.get(&definition.id).is_some() {
                tracing::warn!("duplicate status '{}' ignored", definition.id);
                continue;
            }
            catalog.definitions.push(definition);
        }
        catalog
    }

    /// The statuses of the standard rules.
    pub fn standard() -> Self {
        use AttributeKind::{Dexterity as Dex, Insight as Ins, Might as Mig, Willpower as Wlp};

        Self::new([
            StatusDefinition::cosmetic("accelerated", "Accelerated"),
            StatusDefinition::cosmetic("aura", "Aura"),
            StatusDefinition::cosmetic("barrier", "Barrier"),
            StatusDefinition::cosmetic("beserk", "Beserk"),
            StatusDefinition::cosmetic("blinded", "Blinded"),
            StatusDefinition::cosmetic("death", "Death"),
            StatusDefinition::new("dazed", "Dazed", &[Ins], -2),
            StatusDefinition::new("dex-down", "DEX Down", &[Dex], -2),
            StatusDefinition::new("dex-up", "DEX Up", &[Dex], 2),
            StatusDefinition::new("enraged", "Enraged", &[Dex, Ins], -2),
            StatusDefinition::new("ins-down", "INS Down", &[Ins], -2),
            StatusDefinition::new("ins-up", "INS Up", &[Ins], 2),
            StatusDefinition::cosmetic("ko", "KO"),
            StatusDefinition::new("mig-down", "MIG Down", &[Mig], -2),
            StatusDefinition::new("mig-up", "MIG Up", &[Mig], 2),
            StatusDefinition::cosmetic("reflect", "Reflect"),
            StatusDefinition::cosmetic("regen", "Regen"),
            StatusDefinition::new("shaken", "Shaken", &[Wlp], -2),
            StatusDefinition::cosmetic("sleep", "Sleep"),
            StatusDefinition::new("slow", "Slow", &[Dex], -2),
            StatusDefinition::new("poisoned", "Poisoned", &[Mig, Wlp], -2),
            StatusDefinition::new("weak", "Weak", &[Mig], -2),
            StatusDefinition::new("wlp-down", "WLP Down", &[Wlp], -2),
            StatusDefinition::new("wlp-up", "WLP Up", &[Wlp], 2),
            StatusDefinition::cosmetic("crisis", "Crisis"),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&StatusDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Status identifiers currently applied to an actor.
///
/// Ids are not validated against a catalog; unknown ids simply have no
/// effect when the pipeline runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActiveStatuses {
    ids: BTreeSet<String>,
}

impl ActiveStatuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Apply a status. Returns false if it was already active.
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Remove a status. Returns false if it was not active.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
