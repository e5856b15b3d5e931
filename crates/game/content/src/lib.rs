//! Data-driven rules content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Rules configuration (TOML)
//! - Status catalog (RON)
//! - Actor rosters with items and statuses (RON)
//!
//! All loaders use fabula-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ConfigLoader, ContentFactory, LoadResult, StatusLoader};
