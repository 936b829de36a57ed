//! Fightweek CLI
//!
//! Drives one week of the promotion from the terminal: score and resolve
//! contract offers, simulate single bouts or a whole card. Results print as
//! JSON on stdout; logs go to stderr (`RUST_LOG` controls verbosity).
//!
//! Exit status is 2 when the input was rejected (unknown or unsigned
//! fighter, bad week, malformed JSON) and 1 for any other failure.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fw_core::{CoreError, Role};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fightweek")]
#[command(about = "Weekly fight card simulation and contract resolution", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one bout between two roster fighters
    Fight {
        /// Promotion's fighter (receives the role bonus)
        #[arg(long)]
        a: String,

        /// Opponent
        #[arg(long)]
        b: String,

        /// Roster week
        #[arg(long, default_value_t = 1)]
        week: u32,

        /// Directory holding pool-week-XX.json files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// undercard, co-main or main-event
        #[arg(long)]
        role: Option<Role>,

        /// Seed string (omit for a non-reproducible bout)
        #[arg(long)]
        seed: Option<String>,

        /// Synthesize missing attributes from unseeded entropy (also enabled by config)
        #[arg(long)]
        legacy: bool,
    },

    /// Score a single contract offer
    Score {
        #[arg(long)]
        fighter: String,

        #[arg(long, default_value = "0")]
        base_pay: String,

        #[arg(long, default_value = "0")]
        bonus: String,

        #[arg(long, default_value = "undercard")]
        role: Role,

        /// Organisation prestige (defaults to config)
        #[arg(long)]
        prestige: Option<f64>,
    },

    /// Resolve a JSON array of offers into one signing per fighter
    Resolve {
        /// Offers JSON file
        #[arg(long)]
        offers: PathBuf,

        #[arg(long)]
        prestige: Option<f64>,
    },

    /// Simulate the promotion's card for a week
    Card {
        #[arg(long, default_value_t = 1)]
        week: u32,

        /// Picked fighters in slot order (repeat the flag, max 5)
        #[arg(long = "fighter", required = true)]
        fighters: Vec<String>,

        /// Signed offers JSON (output of `resolve`); picks must be signed
        #[arg(long)]
        signed: Option<PathBuf>,

        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Print the roster for a week
    Roster {
        #[arg(long, default_value_t = 1)]
        week: u32,

        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fw_core=info,fw_cli=info")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            if e.downcast_ref::<CoreError>().is_some_and(CoreError::is_input_error) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = fw_core::config_from_env()?;

    let output = match cli.command {
        Commands::Fight { a, b, week, data_dir, role, seed, legacy } => {
            commands::fight(&data_dir, week, &a, &b, role, seed, legacy, &config)?
        }
        Commands::Score { fighter, base_pay, bonus, role, prestige } => {
            commands::score(&fighter, &base_pay, &bonus, role, prestige.unwrap_or(config.org_prestige))?
        }
        Commands::Resolve { offers, prestige } => {
            commands::resolve(&offers, prestige.unwrap_or(config.org_prestige))?
        }
        Commands::Card { week, fighters, signed, data_dir } => {
            commands::card(&data_dir, week, fighters, signed.as_deref(), &config)?
        }
        Commands::Roster { week, data_dir } => commands::roster(&data_dir, week)?,
    };

    Ok(output)
}
