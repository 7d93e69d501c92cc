//! Outlay CLI - Personal expense tracker
//!
//! Usage:
//!   outlay add --description "coffee" --amount 4.50
//!   outlay list
//!   outlay update --id 1 --amount 5.00
//!   outlay delete --id 1
//!   outlay summary --month 3

mod cli;
mod commands;


use std::process::ExitCode;

use clap::Parser;
use outlay_core::{Error, ExpenseStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let store = ExpenseStore::new(&cli.file);

    let result = match cli.command {
        Commands::Add {
            description,
            amount,
        } => commands::cmd_add(&store, &description, amount),
        Commands::List { limit } => commands::cmd_list(&store, limit),
        Commands::Update {
            id,
            amount,
            description,
        } => commands::cmd_update(&store, id, amount, description.as_deref()),
        Commands::Delete { id } => commands::cmd_delete(&store, id),
        Commands::Summary { month, year } => commands::cmd_summary(&store, month, year),
        Commands::Status => commands::cmd_status(&store),
        Commands::Export { output } => commands::cmd_export(&store, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Map an error to a distinct exit code so scripts can tell failures apart:
/// 2 invalid input, 3 not found, 4 malformed expense file, 5 I/O failure,
/// 1 anything else. Usage errors exit 2 via clap itself.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(Error::InvalidData(_)) => 2,
        Some(Error::NotFound(_)) => 3,
        Some(Error::Malformed(_)) => 4,
        Some(Error::Io(_)) => 5,
        None => 1,
    }
}
