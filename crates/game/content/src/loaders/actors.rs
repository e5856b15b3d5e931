//! Actor roster loader.
//!
//! Loads characters and NPCs with their items and statuses from RON, then
//! runs the derived-stats pipeline so every actor comes back ready to roll.

use std::collections::HashSet;
use std::path::Path;

use fabula_core::{Actor, Rank, Ruleset};

use crate::loaders::{LoadResult, read_file, ron_options};

/// Highest accepted actor level.
pub const MAX_LEVEL: i32 = 999;

/// Highest accepted champion rank.
pub const MAX_CHAMPION: u32 = 10;

/// Loader for actor rosters from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load a roster and recompute every actor against `rules`.
    pub fn load(path: &Path, rules: &Ruleset) -> LoadResult<Vec<Actor>> {
        let content = read_file(path)?;
        Self::parse(&content, rules).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str, rules: &Ruleset) -> LoadResult<Vec<Actor>> {
        let mut actors: Vec<Actor> = ron_options()
            .from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor roster RON: {}", e))?;

        let mut names = HashSet::new();
        for actor in &mut actors {
            Self::check_bounds(actor)?;
            if !names.insert(actor.name.clone()) {
                anyhow::bail!("duplicate actor name '{}'", actor.name);
            }
            Self::check_items(actor)?;
            for unknown in actor.statuses.iter().filter(|id| rules.statuses.get(id).is_none()) {
                tracing::warn!(actor = %actor.name, status = unknown, "unknown status has no effect");
            }
            actor.recompute(rules);
        }

        Ok(actors)
    }

    fn check_bounds(actor: &Actor) -> LoadResult<()> {
        if !(1..=MAX_LEVEL).contains(&actor.level) {
            anyhow::bail!(
                "actor '{}' has level {} (must be 1..={})",
                actor.name,
                actor.level,
                MAX_LEVEL
            );
        }
        if let Rank::Champion(n) = actor.rank {
            if n > MAX_CHAMPION {
                anyhow::bail!(
                    "actor '{}' has champion rank {} (must be <= {})",
                    actor.name,
                    n,
                    MAX_CHAMPION
                );
            }
        }
        Ok(())
    }

    fn check_items(actor: &Actor) -> LoadResult<()> {
        let mut ids = HashSet::new();
        for item in &actor.items {
            if !ids.insert(item.id) {
                anyhow::bail!("actor '{}' has duplicate item id {}", actor.name, item.id);
            }
        }
        Ok(())
    }
}
