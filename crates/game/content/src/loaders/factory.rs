//! Content factory for building the ruleset and rosters from data files.

use std::path::{Path, PathBuf};

use fabula_core::{Actor, RulesConfig, Ruleset, StatusCatalog};

use crate::loaders::{ActorLoader, ConfigLoader, LoadResult, StatusLoader};

/// Content factory that loads all rules content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml      (optional, defaults otherwise)
/// ├── statuses.ron    (optional, standard catalog otherwise)
/// └── actors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const RULES_FILE: &'static str = "rules.toml";
    pub const STATUSES_FILE: &'static str = "statuses.ron";
    pub const ACTORS_FILE: &'static str = "actors.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules configuration from `rules.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join(Self::RULES_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "no rules file, using defaults");
            return Ok(RulesConfig::new());
        }
        ConfigLoader::load(&path)
    }

    /// Load the status catalog from `statuses.ron`, falling back to the
    /// standard catalog when the file does not exist.
    pub fn load_statuses(&self) -> LoadResult<StatusCatalog> {
        let path = self.data_dir.join(Self::STATUSES_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "no status catalog, using standard statuses");
            return Ok(StatusCatalog::standard());
        }
        StatusLoader::load(&path)
    }

    /// Load configuration and status catalog together.
    pub fn load_ruleset(&self) -> LoadResult<Ruleset> {
        Ok(Ruleset::new(self.load_config()?, self.load_statuses()?))
    }

    /// Load and recompute the actor roster from `actors.ron`.
    pub fn load_actors(&self, rules: &Ruleset) -> LoadResult<Vec<Actor>> {
        let path = self.data_dir.join(Self::ACTORS_FILE);
        ActorLoader::load(&path, rules)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_optional_files_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let rules = ContentFactory::new(dir.path()).load_ruleset().unwrap();
        assert_eq!(rules, Ruleset::standard());
    }

    #[test]
    fn reads_files_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rules.toml"), "critical_threshold = 8\n").unwrap();
        std::fs::write(
            dir.path().join("statuses.ron"),
            r#"[(id: "weak", label: "Weak", affects: [mig], modifier: -2)]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("actors.ron"),
            r#"[(name: "Hero", kind: Character, level: 1,
                 attributes: (mig: (base: 8), dex: (base: 8), ins: (base: 8), wlp: (base: 8)),
                 statuses: ["weak"])]"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let rules = factory.load_ruleset().unwrap();
        assert_eq!(rules.config.critical_threshold, 8);
        assert_eq!(rules.statuses.len(), 1);

        let actors = factory.load_actors(&rules).unwrap();
        assert_eq!(actors[0].attributes.mig.current, 6);
    }

    #[test]
    fn missing_roster_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        let err = factory.load_actors(&Ruleset::standard()).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn bundled_data_matches_builtins() {
        let factory = ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
        let rules = factory.load_ruleset().unwrap();
        assert_eq!(rules, Ruleset::standard());

        let actors = factory.load_actors(&rules).unwrap();
        assert_eq!(actors.len(), 4);
        let mirelle = actors.iter().find(|actor| actor.name == "Mirelle").unwrap();
        // dazed
        assert_eq!(mirelle.attributes.ins.current, 8);
        assert!(mirelle.item_by_name("Superior Alchemy (all)").is_some());
    }
}
