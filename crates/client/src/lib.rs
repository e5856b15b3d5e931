//! Command-line harness for the Fabula rules engine.
//!
//! Loads content through `fabula-content`, rolls through `fabula-core` and
//! prints plain text or JSON.

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod session;

pub use config::ClientConfig;
pub use session::Session;
