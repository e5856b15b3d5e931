//! Derived sheet of one actor.

use anyhow::Result;
use clap::Parser;

use super::OutputFormat;
use crate::Session;
use crate::render;

/// Show an actor's recomputed attributes, defenses and resources
#[derive(Parser)]
pub struct Stats {
    /// Actor name (case-insensitive)
    #[arg(value_name = "ACTOR")]
    actor: String,
}

impl Stats {
    pub fn execute(self, session: &mut Session, format: OutputFormat) -> Result<()> {
        let actor = session.actor(&self.actor)?;
        format.emit(actor, || render::actor_sheet(actor))
    }
}
