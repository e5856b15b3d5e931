//! Initiative roll: `1d(DEX) + 1d(INS) + initiative value`.

use crate::dice::DiceSource;
use crate::state::Actor;
use crate::stats::AttributeKind;

use super::die::CheckRequest;
use super::error::CheckError;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitiativeRoll {
    pub dice: [u32; 2],
    /// The actor's derived initiative value.
    pub modifier: f32,
    pub total: f32,
}

impl InitiativeRoll {
    /// Total rounded to two decimals for display.
    pub fn display_total(&self) -> String {
        format!("{:.2}", self.total)
    }
}

/// Roll initiative for a recomputed actor.
pub fn roll_initiative(
    actor: &Actor,
    dice: &mut (impl DiceSource + ?Sized),
) -> Result<InitiativeRoll, CheckError> {
    let request = CheckRequest::new(
        actor.attributes.current(AttributeKind::Dexterity),
        actor.attributes.current(AttributeKind::Insight),
        0,
    )?;
    let first = dice.roll(request.primary_faces);
    let second = dice.roll(request.secondary_faces);
    let modifier = actor.derived.init.value;
    let total = (first + second) as f32 + modifier;

    tracing::debug!(actor = %actor.name, d1 = first, d2 = second, total, "initiative rolled");

    Ok(InitiativeRoll {
        dice: [first, second],
        modifier,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::env::Ruleset;
    use crate::state::Rank;
    use crate::stats::Attributes;

    #[test]
    fn adds_derived_initiative() {
        let mut goblin = Actor::npc("Goblin", Attributes::new(6, 10, 7, 6)).with_rank(Rank::Elite);
        goblin.recompute(&Ruleset::standard());

        let roll = roll_initiative(&goblin, &mut ScriptedDice::new([9, 2])).unwrap();
        assert_eq!(roll.dice, [9, 2]);
        assert_eq!(roll.modifier, 10.5);
        assert_eq!(roll.total, 21.5);
        assert_eq!(roll.display_total(), "21.50");
    }

    #[test]
    fn uses_current_die_sizes() {
        let mut hero = Actor::character("Hero", Attributes::new(8, 8, 8, 8)).with_status("dazed");
        hero.recompute(&Ruleset::standard());

        // dazed lowers INS to d6; the scripted 8 clamps to 6
        let roll = roll_initiative(&hero, &mut ScriptedDice::new([8, 8])).unwrap();
        assert_eq!(roll.dice, [8, 6]);
    }
}
