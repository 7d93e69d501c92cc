//! Domain models for Outlay

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub amount: f64,
    pub description: String,
    /// Calendar date the expense was recorded (day precision)
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
}

/// Derived document metadata, recomputed on every save
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "totalExpenses")]
    pub total_expenses: f64,
}

/// Fields of an expense that can change after it is recorded
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.description.is_none()
    }
}

/// The full expense document: every expense plus the derived total.
///
/// Both keys tolerate absence on load so an older or hand-edited document
/// still parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub meta: Meta,
}

impl Ledger {
    /// Next id to assign: one past the highest live id.
    ///
    /// Deletions leave gaps and ids are never renumbered, so deriving from
    /// the maximum (not the count) keeps new ids from colliding with live
    /// ones.
    pub fn next_id(&self) -> u64 {
        self.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Record a new expense, returning its assigned id
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        created_at: NaiveDate,
    ) -> Result<u64> {
        let description = description.into();
        validate_description(&description)?;
        validate_amount(amount)?;

        let id = self.next_id();
        self.expenses.push(Expense {
            id,
            amount,
            description,
            created_at,
        });
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Apply a partial update to the first expense with the matching id.
    ///
    /// Only supplied fields change; the id and creation date are untouched.
    pub fn update(&mut self, id: u64, update: &ExpenseUpdate) -> Result<&Expense> {
        if update.is_empty() {
            return Err(Error::InvalidData(
                "nothing to update: supply an amount and/or a description".to_string(),
            ));
        }
        if let Some(amount) = update.amount {
            validate_amount(amount)?;
        }
        if let Some(description) = &update.description {
            validate_description(description)?;
        }

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::NotFound(id))?;

        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(description) = &update.description {
            expense.description = description.clone();
        }
        Ok(expense)
    }

    /// Remove every expense with the matching id, returning how many went.
    ///
    /// Filter semantics: duplicates (which should not exist) are swept too,
    /// and removing an absent id is a no-op rather than an error.
    pub fn remove(&mut self, id: u64) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        before - self.expenses.len()
    }

    /// Exact sum of all expense amounts
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of expenses recorded in the given calendar month.
    ///
    /// Without a year this spans all years: March 2023 and March 2024 both
    /// count toward `month == 3`.
    pub fn month_total(&self, month: u32, year: Option<i32>) -> f64 {
        self.expenses
            .iter()
            .filter(|e| e.created_at.month() == month)
            .filter(|e| year.map_or(true, |y| e.created_at.year() == y))
            .map(|e| e.amount)
            .sum()
    }

    /// Expenses ordered most recent first; same-day entries keep their
    /// insertion order.
    pub fn recent_first(&self) -> Vec<Expense> {
        let mut expenses = self.expenses.clone();
        expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(Error::InvalidData(format!(
            "amount must be a finite number, got {}",
            amount
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(Error::InvalidData(
            "description must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut ledger = Ledger::default();
        let first = ledger.add("coffee", 50.0, date(2024, 1, 1)).unwrap();
        let second = ledger.add("lunch", 12.5, date(2024, 1, 2)).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_next_id_skips_past_highest_live_id() {
        let mut ledger = Ledger::default();
        for day in 1..=3 {
            ledger.add("x", 1.0, date(2024, 1, day)).unwrap();
        }

        ledger.remove(2);
        let id = ledger.add("y", 1.0, date(2024, 1, 4)).unwrap();
        assert_eq!(id, 4);
    }

    #[test]
    fn test_add_accepts_zero_amount() {
        let mut ledger = Ledger::default();
        let id = ledger.add("freebie", 0.0, date(2024, 1, 1)).unwrap();
        assert_eq!(ledger.get(id).unwrap().amount, 0.0);
    }

    #[test]
    fn test_add_rejects_non_finite_amount() {
        let mut ledger = Ledger::default();
        let result = ledger.add("bad", f64::NAN, date(2024, 1, 1));
        assert!(matches!(result, Err(Error::InvalidData(_))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let mut ledger = Ledger::default();
        let result = ledger.add("   ", 5.0, date(2024, 1, 1));
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_update_amount_only() {
        let mut ledger = Ledger::default();
        let id = ledger.add("coffee", 4.0, date(2024, 3, 1)).unwrap();

        let update = ExpenseUpdate {
            amount: Some(5.25),
            description: None,
        };
        ledger.update(id, &update).unwrap();

        let expense = ledger.get(id).unwrap();
        assert_eq!(expense.amount, 5.25);
        assert_eq!(expense.description, "coffee");
        assert_eq!(expense.created_at, date(2024, 3, 1));
    }

    #[test]
    fn test_update_missing_id() {
        let mut ledger = Ledger::default();
        let update = ExpenseUpdate {
            amount: Some(1.0),
            description: None,
        };
        let result = ledger.update(42, &update);
        assert!(matches!(result, Err(Error::NotFound(42))));
    }

    #[test]
    fn test_update_with_no_fields() {
        let mut ledger = Ledger::default();
        ledger.add("coffee", 4.0, date(2024, 3, 1)).unwrap();

        let result = ledger.update(1, &ExpenseUpdate::default());
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut ledger = Ledger::default();
        ledger.add("coffee", 4.0, date(2024, 3, 1)).unwrap();

        assert_eq!(ledger.remove(99), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_remove_sweeps_duplicate_ids() {
        let mut ledger = Ledger::default();
        ledger.add("a", 1.0, date(2024, 1, 1)).unwrap();
        // Force a duplicate id, as a hand-edited document could contain
        ledger.expenses.push(Expense {
            id: 1,
            amount: 2.0,
            description: "b".to_string(),
            created_at: date(2024, 1, 2),
        });

        assert_eq!(ledger.remove(1), 2);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_month_total_spans_years() {
        let mut ledger = Ledger::default();
        ledger.add("march 2023", 10.0, date(2023, 3, 1)).unwrap();
        ledger.add("march 2024", 20.0, date(2024, 3, 1)).unwrap();
        ledger.add("april 2024", 99.0, date(2024, 4, 1)).unwrap();

        assert_eq!(ledger.month_total(3, None), 30.0);
    }

    #[test]
    fn test_month_total_with_year_filter() {
        let mut ledger = Ledger::default();
        ledger.add("march 2023", 10.0, date(2023, 3, 1)).unwrap();
        ledger.add("march 2024", 20.0, date(2024, 3, 1)).unwrap();

        assert_eq!(ledger.month_total(3, Some(2024)), 20.0);
        assert_eq!(ledger.month_total(3, Some(2022)), 0.0);
    }

    #[test]
    fn test_recent_first_is_stable_for_ties() {
        let mut ledger = Ledger::default();
        ledger.add("old", 1.0, date(2024, 1, 1)).unwrap();
        ledger.add("tie a", 2.0, date(2024, 2, 1)).unwrap();
        ledger.add("tie b", 3.0, date(2024, 2, 1)).unwrap();
        ledger.add("new", 4.0, date(2024, 3, 1)).unwrap();

        let ordered = ledger.recent_first();
        let descriptions: Vec<&str> = ordered.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["new", "tie a", "tie b", "old"]);
    }

    #[test]
    fn test_expense_document_field_names() {
        let expense = Expense {
            id: 1,
            amount: 19.99,
            description: "coffee".to_string(),
            created_at: date(2024, 6, 15),
        };

        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"createdAt\":\"2024-06-15\""));

        let meta = Meta {
            total_expenses: 19.99,
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"totalExpenses\":19.99"));
    }

    #[test]
    fn test_ledger_parses_bare_document() {
        let ledger: Ledger = serde_json::from_str("{}").unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.meta.total_expenses, 0.0);
    }
}
