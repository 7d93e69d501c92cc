//! Status command implementation

use std::fs;

use anyhow::{Context, Result};
use outlay_core::ExpenseStore;

pub fn cmd_status(store: &ExpenseStore) -> Result<()> {
    println!();
    println!("📊 Outlay Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Expense file: {}", store.path().display());

    if store.path().exists() {
        if let Ok(metadata) = fs::metadata(store.path()) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (no expenses recorded yet)");
    }

    let ledger = store.load().context("Failed to load expense file")?;

    println!();
    println!("   Expenses: {}", ledger.len());
    println!("   Total: ${:.2}", ledger.total());
    if let Some(latest) = ledger.recent_first().first() {
        println!(
            "   Most recent: {} ({})",
            latest.description, latest.created_at
        );
    }
    println!();

    Ok(())
}
