//! Initiative order for the whole roster.

use anyhow::{Context, Result};
use clap::Parser;
use fabula_core::{InitiativeRoll, roll_initiative};
use serde::Serialize;

use super::OutputFormat;
use crate::Session;
use crate::render;

/// Roll initiative for every actor and print the turn order
#[derive(Parser)]
pub struct Initiative {
    /// Only roll for these actors
    #[arg(value_name = "ACTOR")]
    actors: Vec<String>,
}

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    #[serde(flatten)]
    roll: &'a InitiativeRoll,
}

impl Initiative {
    pub fn execute(self, session: &mut Session, format: OutputFormat) -> Result<()> {
        let names: Vec<String> = if self.actors.is_empty() {
            session.actors.iter().map(|actor| actor.name.clone()).collect()
        } else {
            self.actors
        };

        let mut rolls = Vec::with_capacity(names.len());
        for name in names {
            let actor = session.actor(&name)?.clone();
            let roll = roll_initiative(&actor, &mut session.dice)
                .with_context(|| format!("Failed to roll initiative for {}", actor.name))?;
            rolls.push((actor.name, roll));
        }
        // Stable sort keeps roster order on ties
        rolls.sort_by(|a, b| b.1.total.total_cmp(&a.1.total));

        let entries = rolls
            .iter()
            .map(|(name, roll)| Entry { name, roll })
            .collect::<Vec<_>>();
        format.emit(&entries, || render::initiative(&rolls))
    }
}
