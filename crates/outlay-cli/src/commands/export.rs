//! CSV export command implementation

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use outlay_core::export::to_csv;
use outlay_core::ExpenseStore;

pub fn cmd_export(store: &ExpenseStore, output: Option<PathBuf>) -> Result<()> {
    let ledger = store.load().context("Failed to load expense file")?;
    let csv = to_csv(&ledger);

    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(csv.as_bytes())?;

            println!("✅ Exported {} expenses to {}", ledger.len(), path.display());
        }
        None => {
            // Write to stdout
            print!("{}", csv);
        }
    }

    Ok(())
}
