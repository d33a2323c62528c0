//! Transaction display formatting
//!
//! Renders a filtered view as a table for `txfilter list`.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{FilterCriteria, Transaction, DISPLAY_DATE_FORMAT};

/// One table row
#[derive(Debug, Clone, Tabled)]
pub struct TransactionRow {
    #[tabled(rename = "Date")]
    pub date: String,

    #[tabled(rename = "Name")]
    pub name: String,

    #[tabled(rename = "Amount")]
    pub amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.display_date(),
            name: txn.name.clone(),
            amount: format_amount(txn.amount),
        }
    }
}

/// Format an amount with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions match the current filters.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// One-line summary of the active criteria
pub fn format_criteria(criteria: &FilterCriteria) -> String {
    if criteria.is_empty() {
        return "no filters".to_string();
    }

    let mut parts = Vec::new();

    match (criteria.start_date, criteria.end_date) {
        (Some(start), Some(end)) => parts.push(format!(
            "date {} to {}",
            start.format(DISPLAY_DATE_FORMAT),
            end.format(DISPLAY_DATE_FORMAT)
        )),
        (Some(start), None) => parts.push(format!(
            "from {} (ignored until an end date is set)",
            start.format(DISPLAY_DATE_FORMAT)
        )),
        (None, Some(end)) => parts.push(format!(
            "until {} (ignored until a start date is set)",
            end.format(DISPLAY_DATE_FORMAT)
        )),
        (None, None) => {}
    }

    if !criteria.name_pattern.is_empty() {
        parts.push(format!("name contains \"{}\"", criteria.name_pattern));
    }
    if let Some(min) = criteria.min_amount {
        parts.push(format!("amount >= {}", format_amount(min)));
    }
    if let Some(max) = criteria.max_amount {
        parts.push(format!("amount <= {}", format_amount(max)));
    }

    parts.join(", ")
}
