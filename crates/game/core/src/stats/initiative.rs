//! Initiative value.
//!
//! - Characters: init = init_mod + init.bonus
//! - NPCs:       init = init_mod + (DEX_base + INS_base) / 2 + init.bonus + rank_bonus
//!
//! The NPC half-sum is not rounded; a `.5` is meaningful for tie-breaking.

use super::attributes::{AttributeKind, Attributes};
use super::resources::champion_factor;
use crate::config::RulesConfig;
use crate::state::{ActorKind, Rank};

/// Initiative bonus from rank: champion n, elite 2, otherwise 0.
pub fn rank_bonus(kind: ActorKind, rank: Rank, config: &RulesConfig) -> i32 {
    match (kind, rank.normalized()) {
        (ActorKind::Character, _) => 0,
        (ActorKind::Npc, Rank::Champion(n)) => champion_factor(n),
        (ActorKind::Npc, Rank::Elite) => config.elite_multiplier,
        (ActorKind::Npc, Rank::Normal) => 0,
    }
}

/// Compute the initiative value.
pub fn compute_initiative(
    kind: ActorKind,
    rank: Rank,
    attributes: &Attributes,
    init_mod: i32,
    init_bonus: i32,
    config: &RulesConfig,
) -> f32 {
    match kind {
        ActorKind::Character => init_mod.saturating_add(init_bonus) as f32,
        ActorKind::Npc => {
            let half_sum = (attributes.base(AttributeKind::Dexterity) as f32
                + attributes.base(AttributeKind::Insight) as f32)
                / 2.0;
            let flat = init_mod
                .saturating_add(init_bonus)
                .saturating_add(rank_bonus(kind, rank, config));
            flat as f32 + half_sum
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_only_use_gear_and_bonus() {
        let attrs = Attributes::new(8, 12, 12, 8);
        let init = compute_initiative(
            ActorKind::Character,
            Rank::Normal,
            &attrs,
            -2,
            1,
            &RulesConfig::new(),
        );
        assert_eq!(init, -1.0);
    }

    #[test]
    fn npc_half_sum_keeps_fraction() {
        let attrs = Attributes::new(8, 10, 7, 8);
        let init = compute_initiative(ActorKind::Npc, Rank::Normal, &attrs, 0, 0, &RulesConfig::new());
        assert_eq!(init, 8.5);
    }

    #[test]
    fn npc_uses_base_not_current() {
        let mut attrs = Attributes::new(8, 10, 10, 8);
        attrs.dex.current = 6;
        let init = compute_initiative(ActorKind::Npc, Rank::Normal, &attrs, 0, 0, &RulesConfig::new());
        assert_eq!(init, 10.0);
    }

    #[test]
    fn rank_bonus_by_tier() {
        let config = RulesConfig::new();
        assert_eq!(rank_bonus(ActorKind::Npc, Rank::Normal, &config), 0);
        assert_eq!(rank_bonus(ActorKind::Npc, Rank::Elite, &config), 2);
        assert_eq!(rank_bonus(ActorKind::Npc, Rank::Champion(4), &config), 4);
        assert_eq!(rank_bonus(ActorKind::Character, Rank::Elite, &config), 0);

        let attrs = Attributes::new(8, 8, 8, 8);
        let init = compute_initiative(ActorKind::Npc, Rank::Champion(3), &attrs, 1, 2, &config);
        assert_eq!(init, 1.0 + 8.0 + 2.0 + 3.0);
    }

    #[test]
    fn oversized_champion_bonus_saturates() {
        let config = RulesConfig::new();
        assert_eq!(rank_bonus(ActorKind::Npc, Rank::Champion(u32::MAX), &config), i32::MAX);
        let attributes = Attributes::new(8, 8, 8, 8);
        let init = compute_initiative(
            ActorKind::Npc,
            Rank::Champion(u32::MAX),
            &attributes,
            i32::MAX,
            1,
            &config,
        );
        assert!(init.is_finite());
        assert!(init >= i32::MAX as f32);
    }
}
