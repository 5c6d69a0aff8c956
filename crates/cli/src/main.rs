//! Parkwise CLI - Charge computation and rate inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Compute a charge for an elapsed duration
//! pw-cli charge --minutes 65
//!
//! # Compute a charge from entry/exit instants
//! pw-cli charge --entry 2026-03-14T09:00:00Z --exit 2026-03-14T11:05:00Z
//!
//! # Show the effective rate configuration
//! pw-cli rates show
//! ```
//!
//! Rates are read from `PARKWISE_HOURLY_RATE`, `PARKWISE_DAILY_CAP`, and
//! `PARKWISE_CURRENCY` (see [`config`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "pw-cli")]
#[command(author, version, about = "Parkwise CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a parking charge
    Charge {
        /// Elapsed parking duration in minutes
        #[arg(short, long, conflicts_with = "entry")]
        minutes: Option<i64>,

        /// Entry instant (RFC 3339), alternative to --minutes
        #[arg(long, required_unless_present = "minutes")]
        entry: Option<String>,

        /// Exit instant (RFC 3339); defaults to now
        #[arg(long, requires = "entry")]
        exit: Option<String>,
    },
    /// Inspect rate configuration
    Rates {
        #[command(subcommand)]
        action: RatesAction,
    },
}

#[derive(Subcommand)]
enum RatesAction {
    /// Print the effective rate configuration
    Show,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Charge {
            minutes,
            entry,
            exit,
        } => commands::charge::run(minutes, entry.as_deref(), exit.as_deref())?,
        Commands::Rates { action } => match action {
            RatesAction::Show => commands::rates::show()?,
        },
    }
    Ok(())
}
