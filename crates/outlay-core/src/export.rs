//! CSV export of the expense document

use crate::models::Ledger;

/// Render every expense as CSV, header included
pub fn to_csv(ledger: &Ledger) -> String {
    let mut csv = String::from("id,description,amount,date\n");

    for expense in &ledger.expenses {
        csv.push_str(&format!(
            "{},{},{:.2},{}\n",
            expense.id,
            escape_csv_field(&expense.description),
            expense.amount,
            expense.created_at,
        ));
    }

    csv
}

/// Quote a field when it contains a delimiter, quote, or newline
fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
