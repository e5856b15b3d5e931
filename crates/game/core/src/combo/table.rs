//! Alchemy lookup tables: target bands and the 20-entry effect table.

/// Who an alchemy outcome applies to, keyed by a d20 result.
///
/// ```text
///  1..=6   ally or self
///  7..=11  one enemy
/// 12..=16  self and every ally
/// 17..     every enemy
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetBand {
    AllyOrSelf,
    OneEnemy,
    EveryAlly,
    EveryEnemy,
}

impl TargetBand {
    pub const fn from_roll(num: u32) -> Self {
        match num {
            ..=6 => Self::AllyOrSelf,
            7..=11 => Self::OneEnemy,
            12..=16 => Self::EveryAlly,
            _ => Self::EveryEnemy,
        }
    }

    pub const fn is_ally(self) -> bool {
        matches!(self, Self::AllyOrSelf | Self::EveryAlly)
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::AllyOrSelf => "You or one ally you can see that is present on the scene",
            Self::OneEnemy => "One enemy you can see that is present on the scene",
            Self::EveryAlly => "You and every ally present on the scene",
            Self::EveryEnemy => "Every enemy present on the scene",
        }
    }
}

/// Broad category of an effect; drives the trim policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectCategory {
    /// Attribute dice one size higher.
    DiceBoost,
    Damage,
    Resistance,
    /// Harmful status conditions.
    Condition,
    /// Removes every status effect.
    Cleanse,
    Recovery,
}

impl EffectCategory {
    /// Effects that harm their target ("suffers ...").
    pub const fn is_harmful(self) -> bool {
        matches!(self, Self::Damage | Self::Condition)
    }

    /// Buffs, resistances and cleanses: wasted on enemies.
    pub const fn is_supportive(self) -> bool {
        matches!(self, Self::DiceBoost | Self::Resistance | Self::Cleanse)
    }

    /// Whether an effect of this category survives trimming for `band`.
    pub const fn suits(self, band: TargetBand) -> bool {
        if band.is_ally() {
            !self.is_harmful()
        } else {
            !self.is_supportive()
        }
    }
}

/// One entry of the effect table, rendered for a given level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Effect {
    pub category: EffectCategory,
    pub text: String,
}

impl Effect {
    fn new(category: EffectCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Effect for d20 result `num` at character `level`; `None` outside 1..=20.
    pub fn from_roll(num: u32, level: i32) -> Option<Self> {
        use EffectCategory::*;

        let dmg = damage_tier(level);
        let effect = match num {
            1 => Self::new(
                DiceBoost,
                "treats their Dexterity and Might dice as if they were one size higher (up to a maximum of d12) until the end of your next turn.",
            ),
            2 => Self::new(
                DiceBoost,
                "treats their Insight and Willpower dice as if they were one size higher (up to a maximum of d12) until the end of your next turn.",
            ),
            3 => Self::new(Damage, format!("suffers {dmg} air damage.")),
            4 => Self::new(Damage, format!("suffers {dmg} bolt damage.")),
            5 => Self::new(Damage, format!("suffers {dmg} dark damage.")),
            6 => Self::new(Damage, format!("suffers {dmg} earth damage.")),
            7 => Self::new(Damage, format!("suffers {dmg} fire damage.")),
            8 => Self::new(Damage, format!("suffers {dmg} ice damage.")),
            9 => Self::new(
                Resistance,
                "gains Resistance to air and fire damage until the end of the scene.",
            ),
            10 => Self::new(
                Resistance,
                "gains Resistance to bolt and ice damage until the end of the scene.",
            ),
            11 => Self::new(
                Resistance,
                "gains Resistance to dark and earth damage until the end of the scene.",
            ),
            12 => Self::new(Condition, "suffers enraged."),
            13 => Self::new(Condition, "suffers poisoned."),
            14 => Self::new(Condition, "suffers dazed, shaken, slow, and weak."),
            15 => Self::new(Cleanse, "recovers from all status effects."),
            16 | 17 => Self::new(Recovery, "recovers 50 Hit Points and 50 Mind Points."),
            18 => Self::new(Recovery, "recovers 100 Hit Points."),
            19 => Self::new(Recovery, "recovers 100 Mind Points."),
            20 => Self::new(Recovery, "recovers 100 Hit Points and 100 Mind Points."),
            _ => return None,
        };
        Some(effect)
    }
}

/// Damage dealt by table effects: 40 from level 40, 30 from level 20, else 20.
pub const fn damage_tier(level: i32) -> i32 {
    if level >= 40 {
        40
    } else if level >= 20 {
        30
    } else {
        20
    }
}

/// Baseline damage outcome every die offers (fixed, not level-scaled).
pub const BASELINE_POISON: &str = "suffers 20 poison damage.";

/// Baseline healing outcome every die offers.
pub const BASELINE_HEAL: &str = "recovers 30 Hit Points.";
