//! Roll an item: weapon attack, ability check or alchemy.

use anyhow::{Context, Result};
use clap::Parser;
use fabula_core::{AlchemyRequest, resolve_item, roll_alchemy};

use super::OutputFormat;
use crate::Session;
use crate::render;

/// Roll one of an actor's items
#[derive(Parser)]
pub struct Roll {
    /// Actor name (case-insensitive)
    #[arg(value_name = "ACTOR")]
    actor: String,

    /// Item name, exactly as in the roster
    #[arg(value_name = "ITEM")]
    item: String,
}

impl Roll {
    pub fn execute(self, session: &mut Session, format: OutputFormat) -> Result<()> {
        let actor = session.actor(&self.actor)?.clone();
        let item = actor.item_by_name(&self.item).with_context(|| {
            let known = actor
                .items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} has no item '{}' (items: {})", actor.name, self.item, known)
        })?;

        if let Some(request) = AlchemyRequest::for_item(item, actor.level) {
            let roll = roll_alchemy(&request, &mut session.dice);
            tracing::info!(actor = %actor.name, item = %item.name, dice = ?roll.dice, "alchemy rolled");
            return format.emit(&roll, || render::alchemy(&roll));
        }

        let resolution = resolve_item(&actor, item, &mut session.dice, &session.rules.config)
            .with_context(|| format!("Failed to roll {} for {}", item.name, actor.name))?;
        tracing::info!(
            actor = %actor.name,
            item = %item.name,
            checks = resolution.checks.len(),
            "item rolled"
        );
        format.emit(&resolution, || render::resolution(&actor, &resolution))
    }
}
