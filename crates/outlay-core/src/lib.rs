//! Outlay Core Library
//!
//! Shared functionality for the Outlay expense tracker:
//! - Domain models for the expense document
//! - The expense store (load/save with atomic replacement)
//! - CSV export

pub mod error;
pub mod export;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use models::{Expense, ExpenseUpdate, Ledger, Meta};
pub use store::ExpenseStore;
