//! DerivedSnapshot - the complete output of the derived-stats pipeline.
//!
//! The pipeline runs whenever an actor's stored data changes (equip/unequip,
//! status added/removed, level, class or rank change). Layers run in a fixed
//! order:
//!
//! ```text
//! [ Resources ]   reads base MIG/WLP, level, rank, classes, bonuses
//!      ↓
//! [ Attributes ]  base + statuses, clamped
//!      ↓
//! [ Equipment ]   reads current DEX/INS
//!      ↓
//! [ Initiative ]  reads init_mod from equipment
//! ```
//!
//! The snapshot is a pure function of the actor's stored data: current
//! values written by a previous run are never read, so running it twice
//! yields identical output.

use super::attributes::{AttributeModifiers, Attributes, clamp_attributes};
use super::equipment::{Defenses, aggregate_equipment};
use super::initiative::compute_initiative;
use super::resources::{ClassBenefitCounts, ResourceInputs, ResourceMaximums, compute_resources};
use crate::env::Ruleset;
use crate::state::Actor;

/// Every derived value of an actor at one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedSnapshot {
    /// Attributes with `current` filled in.
    pub attributes: Attributes,
    pub resources: ResourceMaximums,
    pub defenses: Defenses,
    pub initiative: f32,
}

impl DerivedSnapshot {
    /// Run the full pipeline for `actor`.
    pub fn compute(actor: &Actor, rules: &Ruleset) -> Self {
        let config = &rules.config;
        let rank = actor.effective_rank();

        // Layer 1: Resources (base attributes only)
        let resources = compute_resources(
            &ResourceInputs {
                kind: actor.kind,
                level: actor.level,
                rank,
                attributes: &actor.attributes,
                classes: ClassBenefitCounts::from_items(&actor.items),
                resources: &actor.resources,
            },
            config,
        );

        // Layer 2: Attributes
        let modifiers = AttributeModifiers::from_statuses(&actor.statuses, &rules.statuses);
        let attributes = clamp_attributes(&actor.attributes, &modifiers, config);

        // Layer 3: Defenses (post-clamp attributes)
        let defenses = aggregate_equipment(&actor.items, &attributes, &actor.derived);

        // Layer 4: Initiative
        let initiative = compute_initiative(
            actor.kind,
            rank,
            &attributes,
            defenses.init_mod,
            actor.derived.init.bonus,
            config,
        );

        tracing::debug!(
            actor = %actor.name,
            hp_max = resources.hp_max,
            mp_max = resources.mp_max,
            def = defenses.def,
            mdef = defenses.mdef,
            init = initiative,
            "derived stats recomputed"
        );

        Self {
            attributes,
            resources,
            defenses,
            initiative,
        }
    }
}
