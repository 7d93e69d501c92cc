//! Monthly summary command implementation

use anyhow::{Context, Result};
use chrono::NaiveDate;
use outlay_core::ExpenseStore;

/// English month name for a 1-12 month number
fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_else(|| format!("month {}", month))
}

pub fn cmd_summary(store: &ExpenseStore, month: u32, year: Option<i32>) -> Result<()> {
    let ledger = store.load().context("Failed to load expense file")?;

    if ledger.is_empty() {
        println!("No expenses found");
        return Ok(());
    }

    let total = ledger.month_total(month, year);
    match year {
        Some(year) => println!(
            "💰 Total expenses for {} {}: ${:.2}",
            month_name(month),
            year,
            total
        ),
        None => println!(
            "💰 Total expenses for {}: ${:.2}",
            month_name(month),
            total
        ),
    }

    Ok(())
}
