//! NPC behavior roll.
//!
//! Picks one of an NPC's behaviors, weighted by each behavior's `weight`,
//! and shuffles the target priority list `1..=5`.

use crate::config::RulesConfig;
use crate::dice::DiceSource;
use crate::state::{Actor, ItemKind};

/// Outcome of a behavior roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorRoll {
    pub actor: String,
    pub behavior: String,
    pub description: String,
    /// Target slots in the order they should be considered.
    pub target_priority: Vec<u32>,
}

impl BehaviorRoll {
    /// Priority list joined with arrows, e.g. `3 -> 1 -> 5 -> 2 -> 4`.
    pub fn priority_text(&self) -> String {
        self.target_priority
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Roll a behavior for `actor`.
///
/// Returns `None` when the actor has no behavior with a positive weight.
pub fn roll_behavior(actor: &Actor, dice: &mut (impl DiceSource + ?Sized)) -> Option<BehaviorRoll> {
    let behaviors = actor
        .items
        .iter()
        .filter_map(|item| match &item.kind {
            ItemKind::Behavior(data) if data.weight > 0 => Some((item, data)),
            _ => None,
        })
        .collect::<Vec<_>>();

    let total: u32 = behaviors.iter().map(|(_, data)| data.weight).sum();
    if total == 0 {
        tracing::debug!(actor = %actor.name, "no behaviors to roll");
        return None;
    }

    // Each behavior owns `weight` consecutive faces of a d(total).
    let mut face = dice.roll(total);
    let (item, data) = behaviors.into_iter().find(|(_, data)| {
        if face <= data.weight {
            true
        } else {
            face -= data.weight;
            false
        }
    })?;

    let target_priority = shuffled_priority(dice);
    tracing::debug!(actor = %actor.name, behavior = %item.name, "behavior rolled");

    Some(BehaviorRoll {
        actor: actor.name.clone(),
        behavior: item.name.clone(),
        description: data.description.clone(),
        target_priority,
    })
}

/// Fisher-Yates shuffle of `1..=TARGET_PRIORITY_SLOTS`.
fn shuffled_priority(dice: &mut (impl DiceSource + ?Sized)) -> Vec<u32> {
    let mut slots = (1..=RulesConfig::TARGET_PRIORITY_SLOTS as u32).collect::<Vec<_>>();
    for i in (1..slots.len()).rev() {
        let j = dice.roll(i as u32 + 1) as usize - 1;
        slots.swap(i, j);
    }
    slots
}
