//! Content loaders for reading rules data from files.
//!
//! Each loader exposes `parse` (from a string) and `load` (from a path) so
//! data can come from disk or be embedded in tests.

pub mod actors;
pub mod config;
pub mod factory;
pub mod status;

pub use actors::ActorLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use status::StatusLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// RON options shared by every loader: `Some(..)` may be omitted and
/// newtype variants may be written without the inner parentheses.
pub(crate) fn ron_options() -> ron::Options {
    ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .with_default_extension(ron::extensions::Extensions::UNWRAP_VARIANT_NEWTYPES)
}
