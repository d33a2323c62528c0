//! Stable linear filter over the transaction list

use crate::models::{FilterCriteria, Transaction};

/// Return the records satisfying every active predicate, in original order
///
/// Source records are never modified; the result is a fresh vector.
pub fn apply(records: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    let filtered: Vec<Transaction> = records
        .iter()
        .filter(|txn| criteria.matches(txn))
        .cloned()
        .collect();

    log::debug!(
        "filter kept {} of {} records ({:?})",
        filtered.len(),
        records.len(),
        criteria
    );

    filtered
}
