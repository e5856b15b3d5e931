//! Status catalog loader.

use std::path::Path;

use fabula_core::{StatusCatalog, StatusDefinition};

use crate::loaders::{LoadResult, read_file, ron_options};

/// Loader for the status catalog from RON files.
///
/// RON format: a list of `(id, label, affects, modifier)` structs.
pub struct StatusLoader;

impl StatusLoader {
    pub fn load(path: &Path) -> LoadResult<StatusCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<StatusCatalog> {
        let definitions: Vec<StatusDefinition> = ron_options()
            .from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse status catalog RON: {}", e))?;

        let count = definitions.len();
        let catalog = StatusCatalog::new(definitions);
        if catalog.len() < count {
            tracing::warn!(
                dropped = count - catalog.len(),
                "status catalog contains duplicate ids"
            );
        }

        Ok(catalog)
    }
}
