//! Actor state: the data a combatant owns.
//!
//! An [`Actor`] stores base attributes, level, rank, manual bonuses, current
//! resource values, items and statuses. Everything else (current
//! attributes, maximum resources, defenses, initiative) is written by
//! [`Actor::recompute`] from that stored data.

use super::item::{Item, ItemId};
use crate::env::Ruleset;
use crate::stats::{ActiveStatuses, Attributes, DerivedSnapshot};

/// Player character or non-player character. Set at creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    #[default]
    Character,
    Npc,
}

impl ActorKind {
    pub const fn is_npc(self) -> bool {
        matches!(self, Self::Npc)
    }
}

/// NPC combat tier.
///
/// `Champion(n)` always carries `n >= 2`; use [`Rank::champion`] to build one
/// from untrusted input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Normal,
    Elite,
    Champion(u32),
}

impl Rank {
    /// Champion rank with multiplier `n`; `n <= 1` is a normal NPC.
    pub const fn champion(n: u32) -> Self {
        if n <= 1 { Self::Normal } else { Self::Champion(n) }
    }

    /// Re-apply the champion invariant to a deserialized rank.
    pub const fn normalized(self) -> Self {
        match self {
            Self::Champion(n) => Self::champion(n),
            other => other,
        }
    }
}

/// A resource pool (HP, MP or IP).
///
/// `max` is derived; `bonus` is a manual flat addition; `current` changes
/// only through damage and healing, never through the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourceMeter {
    pub current: i32,
    pub max: i32,
    pub bonus: i32,
}

impl ResourceMeter {
    pub const fn with_bonus(bonus: i32) -> Self {
        Self {
            current: 0,
            max: 0,
            bonus,
        }
    }
}

/// HP, MP and IP pools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resources {
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub ip: ResourceMeter,
}

/// A derived value with its manual bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DerivedValue<T> {
    pub bonus: i32,
    pub value: T,
}

/// Defense, magic defense and initiative.
///
/// Initiative is fractional: NPCs add half their Dexterity + Insight
/// without rounding, and the fraction breaks ties.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Derived {
    pub def: DerivedValue<i32>,
    pub mdef: DerivedValue<i32>,
    pub init: DerivedValue<f32>,
}

/// A combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub name: String,
    pub kind: ActorKind,
    pub level: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rank: Rank,
    pub attributes: Attributes,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: Resources,
    #[cfg_attr(feature = "serde", serde(default))]
    pub derived: Derived,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub statuses: ActiveStatuses,
}

impl Actor {
    /// Create a level-1 player character.
    pub fn character(name: impl Into<String>, attributes: Attributes) -> Self {
        Self::new(name, ActorKind::Character, attributes)
    }

    /// Create a level-1, normal-rank NPC.
    pub fn npc(name: impl Into<String>, attributes: Attributes) -> Self {
        Self::new(name, ActorKind::Npc, attributes)
    }

    fn new(name: impl Into<String>, kind: ActorKind, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            kind,
            level: 1,
            rank: Rank::Normal,
            attributes,
            resources: Resources::default(),
            derived: Derived::default(),
            items: Vec::new(),
            statuses: ActiveStatuses::new(),
        }
    }

    /// Builder: set level.
    #[must_use]
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Builder: set rank. Ignored for player characters.
    #[must_use]
    pub fn with_rank(mut self, rank: Rank) -> Self {
        if self.kind.is_npc() {
            self.rank = rank.normalized();
        }
        self
    }

    /// Builder: add an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Builder: apply a status.
    #[must_use]
    pub fn with_status(mut self, id: &str) -> Self {
        self.statuses.add(id);
        self
    }

    /// Rank as seen by the rules: characters are always normal.
    pub fn effective_rank(&self) -> Rank {
        match self.kind {
            ActorKind::Character => Rank::Normal,
            ActorKind::Npc => self.rank.normalized(),
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn equipped_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.equipped)
    }

    /// Flip an item's equipped flag. Returns the new flag, or `None` if the
    /// actor does not own the item.
    ///
    /// Callers recompute afterwards.
    pub fn toggle_equipped(&mut self, id: ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.equipped = !item.equipped;
        Some(item.equipped)
    }

    /// Run the derived-stats pipeline and store the result.
    ///
    /// The whole snapshot is computed before anything is written, so the
    /// actor is never left half-updated.
    pub fn recompute(&mut self, rules: &Ruleset) -> DerivedSnapshot {
        let snapshot = DerivedSnapshot::compute(self, rules);
        self.apply(&snapshot);
        snapshot
    }

    /// Write a computed snapshot into the derived fields.
    pub fn apply(&mut self, snapshot: &DerivedSnapshot) {
        self.attributes = snapshot.attributes;
        self.resources.hp.max = snapshot.resources.hp_max;
        self.resources.mp.max = snapshot.resources.mp_max;
        if let Some(ip_max) = snapshot.resources.ip_max {
            self.resources.ip.max = ip_max;
        }
        self.derived.def.value = snapshot.defenses.def;
        self.derived.mdef.value = snapshot.defenses.mdef;
        self.derived.init.value = snapshot.initiative;
    }
}
