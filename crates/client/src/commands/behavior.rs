//! NPC behavior and target priority.

use anyhow::{Result, bail};
use clap::Parser;
use fabula_core::roll_behavior;

use super::OutputFormat;
use crate::Session;
use crate::render;

/// Pick an NPC's behavior and target priority
#[derive(Parser)]
pub struct Behavior {
    /// NPC name (case-insensitive)
    #[arg(value_name = "ACTOR")]
    actor: String,
}

impl Behavior {
    pub fn execute(self, session: &mut Session, format: OutputFormat) -> Result<()> {
        let actor = session.actor(&self.actor)?.clone();
        let Some(roll) = roll_behavior(&actor, &mut session.dice) else {
            bail!("{} has no weighted behaviors", actor.name);
        };
        tracing::info!(actor = %actor.name, behavior = %roll.behavior, "behavior rolled");
        format.emit(&roll, || render::behavior(&roll))
    }
}
