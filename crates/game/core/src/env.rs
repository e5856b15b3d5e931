//! Read-only rules data shared by every computation.
//!
//! The [`Ruleset`] bundles the tunable constants and the status catalog. It
//! is built once at startup (from defaults or from content files) and then
//! only ever borrowed.

use crate::config::RulesConfig;
use crate::stats::StatusCatalog;

/// Immutable rules data passed into the pipeline and check resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ruleset {
    pub config: RulesConfig,
    pub statuses: StatusCatalog,
}

impl Ruleset {
    pub fn new(config: RulesConfig, statuses: StatusCatalog) -> Self {
        Self { config, statuses }
    }

    /// Default constants with the standard status catalog.
    pub fn standard() -> Self {
        Self::new(RulesConfig::new(), StatusCatalog::standard())
    }
}
