//! Loaded content plus the session's dice.

use std::path::Path;

use anyhow::{Context, Result};
use fabula_content::ContentFactory;
use fabula_core::{Actor, PcgDice, Ruleset};

/// Rules, roster and seeded dice for one invocation.
pub struct Session {
    pub rules: Ruleset,
    pub actors: Vec<Actor>,
    pub dice: PcgDice,
    pub seed: u64,
}

impl Session {
    /// Load content from `data_dir` and seed the dice.
    pub fn open(data_dir: &Path, seed: Option<u64>) -> Result<Self> {
        let factory = ContentFactory::new(data_dir);
        let rules = factory
            .load_ruleset()
            .with_context(|| format!("loading rules from {}", data_dir.display()))?;
        let actors = factory
            .load_actors(&rules)
            .with_context(|| format!("loading actors from {}", data_dir.display()))?;

        let seed = seed.unwrap_or_else(rand::random);
        tracing::info!(seed, actors = actors.len(), "session opened");

        Ok(Self {
            rules,
            actors,
            dice: PcgDice::new(seed),
            seed,
        })
    }

    /// Look up an actor by name, case-insensitively.
    pub fn actor(&self, name: &str) -> Result<&Actor> {
        self.actors
            .iter()
            .find(|actor| actor.name.eq_ignore_ascii_case(name))
            .with_context(|| {
                let known = self
                    .actors
                    .iter()
                    .map(|actor| actor.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("unknown actor '{}' (known: {})", name, known)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"[
        (name: "Hero", kind: Character, level: 3,
         attributes: (mig: (base: 8), dex: (base: 8), ins: (base: 8), wlp: (base: 8))),
    ]"#;

    #[test]
    fn finds_actors_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("actors.ron"), ROSTER).unwrap();

        let session = Session::open(dir.path(), Some(42)).unwrap();
        assert_eq!(session.seed, 42);
        assert_eq!(session.actor("hero").unwrap().level, 3);

        let err = session.actor("Villain").unwrap_err();
        assert!(err.to_string().contains("known: Hero"));
    }

    #[test]
    fn missing_roster_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = Session::open(dir.path(), Some(1)).err().unwrap();
        assert!(err.to_string().starts_with("loading actors from"));
    }
}
