//! Canonical transaction dataset
//!
//! The full, normalized list of transactions the panel filters over. It is
//! built once at load time and never mutated afterwards; filtered views are
//! fresh vectors cloned out of it.

use std::ops::Deref;
use std::sync::Arc;

use super::transaction::Transaction;

/// Compiled-in seed rows: ISO date, payee name, amount
const SEED_ROWS: &[(&str, &str, f64)] = &[
    ("2023-01-01", "John Doe", 100.0),
    ("2023-01-02", "Jane Smith", 150.5),
    ("2023-01-03", "Bob Johnson", 75.2),
    ("2023-02-05", "Alice Lee", 200.75),
    ("2023-02-10", "Mark Davis", 120.3),
    ("2023-02-15", "Emily White", 80.5),
    ("2023-03-03", "Chris Brown", 300.25),
    ("2023-03-08", "Sarah Miller", 50.75),
    ("2023-03-15", "David Wilson", 180.9),
    ("2023-03-21", "David Wilson", 380.6),
];

/// Immutable, cheaply clonable list of transactions
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[Transaction]>,
}

impl Dataset {
    /// Wrap an already normalized list of transactions
    pub fn new(records: Vec<Transaction>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Load the compiled-in seed data
    ///
    /// Rows whose ISO date does not parse are skipped with a warning.
    pub fn builtin() -> Self {
        let records: Vec<Transaction> = SEED_ROWS
            .iter()
            .filter_map(|&(date, name, amount)| {
                let txn = Transaction::from_iso(date, name, amount);
                if txn.is_none() {
                    log::warn!("skipping seed row with invalid date {:?}", date);
                }
                txn
            })
            .collect();

        log::debug!("loaded {} built-in transactions", records.len());
        Self::new(records)
    }

    /// The records as a slice
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    /// Copy the records into an owned view
    pub fn to_vec(&self) -> Vec<Transaction> {
        self.records.to_vec()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Deref for Dataset {
    type Target = [Transaction];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset() {
        let data = Dataset::builtin();
        assert_eq!(data.len(), 10);
        assert_eq!(data[0].name, "John Doe");
        assert_eq!(data[0].display_date(), "01-01-2023");
        assert_eq!(data[9].name, "David Wilson");
        assert_eq!(data[9].amount, 380.6);
    }

    #[test]
    fn test_clones_share_records() {
        let data = Dataset::builtin();
        let other = data.clone();
        assert!(Arc::ptr_eq(&data.records, &other.records));
    }

    #[test]
    fn test_to_vec_is_independent_copy() {
        let data = Dataset::builtin();
        let mut view = data.to_vec();
        view.clear();
        assert_eq!(data.len(), 10);
    }
}
