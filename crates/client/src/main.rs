//! `fabula` command-line client.
//!
//! Loads rules and a roster from a content directory, then rolls.
//!
//! # Examples
//!
//! ```bash
//! fabula stats Aria
//! fabula --seed 7 roll Aria "Bronze Sword"
//! fabula alchemy --tier superior --dice 3,18,20,9
//! fabula --format json initiative
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fabula_client::commands::{Alchemy, Behavior, Initiative, OutputFormat, Roll, Stats};
use fabula_client::logging::setup_logging;
use fabula_client::{ClientConfig, Session};

/// Fabula Ultima rules engine
#[derive(Parser)]
#[command(name = "fabula")]
#[command(about = "Roll checks and inspect derived stats", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides FABULA_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Dice seed (overrides FABULA_SEED)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log directory (overrides FABULA_LOG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show an actor's derived stats
    Stats(Stats),

    /// Roll one of an actor's items
    Roll(Roll),

    /// Roll or list alchemy outcomes
    Alchemy(Alchemy),

    /// Roll initiative for the roster
    Initiative(Initiative),

    /// Pick an NPC behavior and target priority
    Behavior(Behavior),
}

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.log_dir.is_some() {
        config.log_dir = cli.log_dir;
    }

    let log_file = setup_logging(config.log_dir.as_deref(), config.session_id.as_deref())?;
    tracing::debug!("Configuration: {:?}", config);

    let mut session = Session::open(&config.data_dir, config.seed)?;
    tracing::info!(
        "Session ready: seed={} log={}",
        session.seed,
        log_file.display()
    );

    let format = cli.format;
    match cli.command {
        Command::Stats(cmd) => cmd.execute(&mut session, format),
        Command::Roll(cmd) => cmd.execute(&mut session, format),
        Command::Alchemy(cmd) => cmd.execute(&mut session, format),
        Command::Initiative(cmd) => cmd.execute(&mut session, format),
        Command::Behavior(cmd) => cmd.execute(&mut session, format),
    }
}
