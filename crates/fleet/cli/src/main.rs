//! Fleet battle calculator.
//!
//! ```bash
//! fleet air --ship 83 84 89
//! fleet air --fleet kido_butai
//! fleet day --slots=7,7,116,25 --attacker 80 --defender 501
//! fleet night --slots=15,15 --attacker 1
//! fleet level 10 49 75
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fleet_cli::CliConfig;
use fleet_cli::commands::{Air, Day, Level, Night};

/// Fleet battle calculator
#[derive(Parser)]
#[command(name = "fleet")]
#[command(about = "Air superiority and attack kind calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Master data directory (overrides FLEET_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Data config TOML (overrides FLEET_DATA_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    data_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Air superiority of a fleet
    Air(Air),

    /// Daytime attack kind of a ship
    Day(Day),

    /// Night battle attack kind of a ship
    Night(Night),

    /// Level-scaled parameter
    Level(Level),
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.data_dir, cli.data_config);
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Command::Air(cmd) => cmd.execute(&config),
        Command::Day(cmd) => cmd.execute(&config),
        Command::Night(cmd) => cmd.execute(&config),
        Command::Level(cmd) => cmd.execute(),
    }
}
