//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Track personal expenses from the command line
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Personal expense tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Expense file path
    #[arg(long, default_value = "expenses.json", global = true)]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// What the money went to
        #[arg(short, long)]
        description: String,

        /// Amount spent (zero is allowed)
        #[arg(short, long)]
        amount: f64,
    },

    /// List expenses, most recent first
    List {
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Change the amount and/or description of an expense
    Update {
        /// Expense ID
        #[arg(long)]
        id: u64,

        /// New amount
        #[arg(long)]
        amount: Option<f64>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Remove an expense
    Delete {
        /// Expense ID
        #[arg(long)]
        id: u64,
    },

    /// Total spending for a calendar month
    Summary {
        /// Month number (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        /// Restrict to one year (all years when omitted)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show expense file status
    Status,

    /// Export expenses to CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
