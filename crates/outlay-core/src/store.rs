//! The expense store: load/save of the on-disk expense document
//!
//! The document is a single pretty-printed JSON file. Loading tolerates a
//! missing or empty file (both mean "no expenses yet"); saving recomputes
//! the derived total and replaces the file atomically so a crash mid-write
//! leaves the previous document intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Ledger;

/// File-backed expense store with an explicit load/save contract
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the expense document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full document, or an empty ledger if none exists yet
    pub fn load(&self) -> Result<Ledger> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no expense document at {}, starting empty", self.path.display());
                return Ok(Ledger::default());
            }
            Err(err) => return Err(Error::Io(err)),
        };

        if contents.trim().is_empty() {
            return Ok(Ledger::default());
        }

        let ledger: Ledger = serde_json::from_str(&contents)?;
        debug!(
            "loaded {} expenses from {}",
            ledger.len(),
            self.path.display()
        );
        Ok(ledger)
    }

    /// Recompute the derived total and write the full document back.
    ///
    /// The document is written to a temp file in the same directory and
    /// renamed over the target, so readers never observe a torn write.
    pub fn save(&self, ledger: &mut Ledger) -> Result<()> {
        ledger.meta.total_expenses = ledger.total();

        let json = serde_json::to_string_pretty(&ledger)?;

        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        debug!(
            "saved {} expenses to {}",
            ledger.len(),
            self.path.display()
        );
        Ok(())
    }
}
