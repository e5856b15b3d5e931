//! Client configuration from the process environment.
use std::env;
use std::path::PathBuf;

/// Default content directory, relative to the workspace root.
pub const DEFAULT_DATA_DIR: &str = "crates/game/content/data";

/// Client configuration.
///
/// Command-line flags override every field.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `rules.toml`, `statuses.ron` and `actors.ron`.
    pub data_dir: PathBuf,
    /// Dice seed; a random seed is drawn when unset.
    pub seed: Option<u64>,
    /// Log directory; the platform cache directory when unset.
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed: None,
            log_dir: None,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FABULA_DATA_DIR` - Content directory (default: `crates/game/content/data`)
    /// - `FABULA_SEED` - Dice seed (default: random)
    /// - `FABULA_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `FABULA_SESSION_ID` - Log session name (default: `session_<timestamp>`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("FABULA_DATA_DIR") {
            config.data_dir = dir;
        }
        config.seed = read_env::<u64>("FABULA_SEED");
        config.log_dir = read_env::<PathBuf>("FABULA_LOG_DIR");
        config.session_id = read_env::<String>("FABULA_SESSION_ID").filter(|id| !id.is_empty());

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
