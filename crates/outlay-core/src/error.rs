//! Error types for Outlay

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed expense document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Expense {0} not found")]
    NotFound(u64),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
