//! Alchemy rolls without an actor.

use anyhow::{Result, bail};
use clap::Parser;
use fabula_core::{AlchemyRequest, AlchemyRoll, AlchemyTier, enumerate_outcomes, roll_alchemy};

use super::OutputFormat;
use crate::Session;
use crate::render;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Tier {
    /// Two dice
    Basic,
    /// Three dice
    Advanced,
    /// Four dice
    Superior,
}

impl From<Tier> for AlchemyTier {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Basic => AlchemyTier::Basic,
            Tier::Advanced => AlchemyTier::Advanced,
            Tier::Superior => AlchemyTier::Superior,
        }
    }
}

/// Roll alchemy dice, or list the effects of given dice
#[derive(Parser)]
pub struct Alchemy {
    /// Alchemy tier
    #[arg(short, long, value_enum, default_value = "basic")]
    tier: Tier,

    /// Alchemist level, which sets the damage tier
    #[arg(short, long, default_value_t = 5)]
    level: i32,

    /// Use these d20 results instead of rolling (e.g. --dice 3,18)
    #[arg(short, long, value_delimiter = ',', value_name = "D20")]
    dice: Vec<u32>,

    /// Keep outcomes that do not suit their target
    #[arg(short, long)]
    all: bool,
}

impl Alchemy {
    pub fn execute(self, session: &mut Session, format: OutputFormat) -> Result<()> {
        let request = AlchemyRequest {
            tier: self.tier.into(),
            level: self.level,
            trim: !self.all,
        };

        let roll = if self.dice.is_empty() {
            roll_alchemy(&request, &mut session.dice)
        } else {
            if let Some(bad) = self.dice.iter().find(|die| !(1..=20).contains(*die)) {
                bail!("alchemy dice are d20 results, got {}", bad);
            }
            AlchemyRoll {
                outcomes: enumerate_outcomes(&self.dice, request.level, request.trim),
                dice: self.dice,
            }
        };

        tracing::info!(dice = ?roll.dice, outcomes = roll.outcomes.len(), "alchemy listed");
        format.emit(&roll, || render::alchemy(&roll))
    }
}
