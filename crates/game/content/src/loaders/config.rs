//! Rules configuration loader.

use std::path::Path;

use fabula_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
///
/// Every key is optional; missing keys keep their published default.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        if config.attribute_min > config.attribute_max {
            anyhow::bail!(
                "attribute_min ({}) exceeds attribute_max ({})",
                config.attribute_min,
                config.attribute_max
            );
        }

        Ok(config)
    }
}
