//! Pairwise outcome enumeration.
//!
//! For each die `num` (in roll order):
//!
//! ```text
//! 1. num+Any  poison baseline   (dropped when trimming an ally band)
//! 2. num+Any  healing baseline
//! 3. num+res  band(num) + effect(res) for every other die res
//! ```
//!
//! Outcomes are deduplicated by text within a die, then merged into the
//! global list where the first occurrence of a text wins.

use std::collections::HashSet;
use std::fmt;

use super::table::{BASELINE_HEAL, BASELINE_POISON, Effect, TargetBand};

/// Label of a combo: the die itself, or the die paired with another result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComboKey {
    Any(u32),
    Pair(u32, u32),
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any(num) => write!(f, "{num}+Any"),
            Self::Pair(num, res) => write!(f, "{num}+{res}"),
        }
    }
}

/// One possible alchemy effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboOutcome {
    pub combo: ComboKey,
    pub effect: String,
}

impl ComboOutcome {
    fn new(combo: ComboKey, band: TargetBand, effect: &str) -> Self {
        Self {
            combo,
            effect: format!("{} {}", band.text(), effect),
        }
    }
}

/// Enumerate every outcome reachable from `dice`.
///
/// An empty list is a valid result.
pub fn enumerate_outcomes(dice: &[u32], level: i32, trim: bool) -> Vec<ComboOutcome> {
    let mut seen = HashSet::new();
    let mut outcomes = Vec::new();

    for (i, &num) in dice.iter().enumerate() {
        for outcome in die_outcomes(dice, i, num, level, trim) {
            if seen.insert(outcome.effect.clone()) {
                outcomes.push(outcome);
            }
        }
    }

    tracing::debug!(dice = ?dice, level, trim, outcomes = outcomes.len(), "alchemy enumerated");
    outcomes
}

fn die_outcomes(dice: &[u32], index: usize, num: u32, level: i32, trim: bool) -> Vec<ComboOutcome> {
    if !(1..=20).contains(&num) {
        tracing::warn!(num, "die result outside the alchemy table");
        return Vec::new();
    }
    let band = TargetBand::from_roll(num);
    let mut outcomes = Vec::with_capacity(dice.len() + 1);

    if !trim || !band.is_ally() {
        outcomes.push(ComboOutcome::new(ComboKey::Any(num), band, BASELINE_POISON));
    }
    outcomes.push(ComboOutcome::new(ComboKey::Any(num), band, BASELINE_HEAL));

    let others = dice
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .map(|(_, &res)| res);

    for res in others {
        let Some(effect) = Effect::from_roll(res, level) else {
            tracing::warn!(res, "die result outside the alchemy table");
            continue;
        };
        if trim && !effect.category.suits(band) {
            continue;
        }
        let outcome = ComboOutcome::new(ComboKey::Pair(num, res), band, &effect.text);
        if !outcomes.iter().any(|o| o.effect == outcome.effect) {
            outcomes.push(outcome);
        }
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects(outcomes: &[ComboOutcome]) -> Vec<&str> {
        outcomes.iter().map(|o| o.effect.as_str()).collect()
    }

    #[test]
    fn out_of_table_dice_produce_nothing() {
        assert!(enumerate_outcomes(&[0, 25], 1, true).is_empty());
        assert!(enumerate_outcomes(&[0, 25], 1, false).is_empty());

        // valid die keeps its baselines, the invalid one is neither target nor effect
        let outcomes = enumerate_outcomes(&[18, 21], 1, false);
        let combos: Vec<String> = outcomes.iter().map(|o| o.combo.to_string()).collect();
        assert_eq!(combos, vec!["18+Any", "18+Any"]);
    }

    #[test]
    fn combo_key_labels() {
        assert_eq!(ComboKey::Any(7).to_string(), "7+Any");
        assert_eq!(ComboKey::Pair(7, 15).to_string(), "7+15");
    }

    #[test]
    fn double_twenty_has_no_duplicates() {
        let outcomes = enumerate_outcomes(&[20, 20], 1, true);
        let unique: HashSet<_> = outcomes.iter().map(|o| &o.effect).collect();
        assert_eq!(unique.len(), outcomes.len());
        assert_eq!(
            effects(&outcomes),
            vec![
                "Every enemy present on the scene suffers 20 poison damage.",
                "Every enemy present on the scene recovers 30 Hit Points.",
                "Every enemy present on the scene recovers 100 Hit Points and 100 Mind Points.",
            ]
        );
        assert_eq!(outcomes[2].combo, ComboKey::Pair(20, 20));
    }

    #[test]
    fn ally_band_drops_poison_when_trimming() {
        let outcomes = enumerate_outcomes(&[3, 18], 1, true);
        // die 3 (ally): heal, 3+18 recovery; die 18 (enemy): poison, heal, 18+3 damage
        let combos: Vec<String> = outcomes.iter().map(|o| o.combo.to_string()).collect();
        assert_eq!(combos, vec!["3+Any", "3+18", "18+Any", "18+Any", "18+3"]);
        assert_eq!(
            outcomes[4].effect,
            "Every enemy present on the scene suffers 20 air damage."
        );
    }

    #[test]
    fn trim_filters_by_band() {
        // ally band never suffers; enemy band never receives buffs
        let outcomes = enumerate_outcomes(&[1, 4, 9, 13], 1, true);
        for outcome in &outcomes {
            let ally = outcome.effect.contains("ally");
            if ally {
                assert!(!outcome.effect.contains("suffers"), "{}", outcome.effect);
            } else {
                assert!(!outcome.effect.contains("treats"), "{}", outcome.effect);
                assert!(!outcome.effect.contains("gains"), "{}", outcome.effect);
            }
        }
    }

    #[test]
    fn untrimmed_keeps_every_pair() {
        let outcomes = enumerate_outcomes(&[1, 9, 14], 1, false);
        // three bands, 3 dice × (2 baselines + 2 pairs), all distinct
        assert_eq!(outcomes.len(), 12);
        assert!(outcomes.iter().any(|o| o.combo == ComboKey::Pair(9, 1)));
    }

    #[test]
    fn first_occurrence_keeps_its_key() {
        // 16 and 17 map to the same effect text for the 1-band target
        let outcomes = enumerate_outcomes(&[1, 16, 17], 1, true);
        let recover: Vec<_> = outcomes
            .iter()
            .filter(|o| o.effect.ends_with("recovers 50 Hit Points and 50 Mind Points."))
            .filter(|o| o.effect.starts_with("You or one ally"))
            .collect();
        assert_eq!(recover.len(), 1);
        assert_eq!(recover[0].combo, ComboKey::Pair(1, 16));
    }

    #[test]
    fn level_raises_table_damage() {
        let outcomes = enumerate_outcomes(&[8, 7], 45, true);
        assert!(effects(&outcomes).contains(&"One enemy you can see that is present on the scene suffers 40 fire damage."));
        // baseline poison stays at 20
        assert!(effects(&outcomes).contains(&"One enemy you can see that is present on the scene suffers 20 poison damage."));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(enumerate_outcomes(&[], 10, true).is_empty());
    }
}
