//! Subcommands of the `fabula` binary.
//!
//! Each command owns its arguments and runs against an open
//! [`Session`](crate::Session).

mod alchemy;
mod behavior;
mod initiative;
mod roll;
mod stats;

pub use alchemy::Alchemy;
pub use behavior::Behavior;
pub use initiative::Initiative;
pub use roll::Roll;
pub use stats::Stats;

use anyhow::{Context, Result};
use serde::Serialize;

/// How command results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Print `value` as JSON, or the text produced by `text`.
    pub(crate) fn emit<T, F>(self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        match self {
            Self::Text => print!("{}", text()),
            Self::Json => {
                let json =
                    serde_json::to_string_pretty(value).context("Failed to serialize output")?;
                println!("{}", json);
            }
        }
        Ok(())
    }
}
