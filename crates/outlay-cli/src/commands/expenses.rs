//! Expense command implementations (add, list, update, delete)

use anyhow::{Context, Result};
use chrono::Utc;
use outlay_core::{ExpenseStore, ExpenseUpdate};

// Fixed column widths for the list table: ID, Amount, Description, Date.
// Values wider than their column overflow the alignment rather than being
// truncated.
const LIST_WIDTHS: (usize, usize, usize, usize) = (5, 10, 18, 15);

pub fn cmd_add(store: &ExpenseStore, description: &str, amount: f64) -> Result<()> {
    let mut ledger = store.load().context("Failed to load expense file")?;

    let today = Utc::now().date_naive();
    let id = ledger.add(description, amount, today)?;
    store.save(&mut ledger).context("Failed to save expense file")?;

    println!("✅ Added expense {}: ${:.2} for {}", id, amount, description);
    Ok(())
}

pub fn cmd_list(store: &ExpenseStore, limit: Option<usize>) -> Result<()> {
    let ledger = store.load().context("Failed to load expense file")?;

    if ledger.is_empty() {
        println!("No expenses found");
        return Ok(());
    }

    let expenses = ledger.recent_first();
    let shown = limit.unwrap_or(expenses.len()).min(expenses.len());

    let (w_id, w_amount, w_desc, w_date) = LIST_WIDTHS;
    println!();
    println!(
        "{:<w_id$}{:<w_amount$}{:<w_desc$}{:<w_date$}",
        "ID", "Amount", "Description", "Date"
    );
    println!("{}", "-".repeat(w_id + w_amount + w_desc + w_date));

    for expense in &expenses[..shown] {
        println!(
            "{:<w_id$}{:<w_amount$}{:<w_desc$}{:<w_date$}",
            expense.id,
            format!("${:.2}", expense.amount),
            expense.description,
            expense.created_at.to_string()
        );
    }

    if shown < expenses.len() {
        println!();
        println!("Showing {} of {} expenses.", shown, expenses.len());
    }

    Ok(())
}

pub fn cmd_update(
    store: &ExpenseStore,
    id: u64,
    amount: Option<f64>,
    description: Option<&str>,
) -> Result<()> {
    let update = ExpenseUpdate {
        amount,
        description: description.map(str::to_string),
    };

    let mut ledger = store.load().context("Failed to load expense file")?;
    let expense = ledger.update(id, &update)?.clone();
    store.save(&mut ledger).context("Failed to save expense file")?;

    println!(
        "✅ Updated expense {}: ${:.2} for {}",
        expense.id, expense.amount, expense.description
    );
    Ok(())
}

pub fn cmd_delete(store: &ExpenseStore, id: u64) -> Result<()> {
    let mut ledger = store.load().context("Failed to load expense file")?;
    let removed = ledger.remove(id);
    store.save(&mut ledger).context("Failed to save expense file")?;

    if removed > 0 {
        println!("✅ Deleted expense {}", id);
    } else {
        println!("✅ Deleted expense {} (nothing matched)", id);
    }
    Ok(())
}
