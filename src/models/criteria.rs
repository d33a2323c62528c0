//! Filter criteria
//!
//! Every field is independently optional; an unset field imposes no
//! constraint. Each predicate is exposed on its own so the filter engine
//! can combine them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// User-specified constraints on the transaction list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive lower date bound
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper date bound
    pub end_date: Option<NaiveDate>,

    /// Case-insensitive payee substring
    pub name_pattern: String,

    /// Inclusive lower amount bound
    pub min_amount: Option<f64>,

    /// Inclusive upper amount bound
    pub max_amount: Option<f64>,
}

impl FilterCriteria {
    /// Create empty criteria (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both date bounds
    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Set the payee pattern
    pub fn with_name(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = pattern.into();
        self
    }

    /// Set the amount bounds
    pub fn with_amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// True if no field constrains anything
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.name_pattern.is_empty()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
    }

    /// Case-insensitive substring match on the payee name
    pub fn matches_name(&self, txn: &Transaction) -> bool {
        self.name_pattern.is_empty()
            || txn
                .name
                .to_lowercase()
                .contains(&self.name_pattern.to_lowercase())
    }

    /// Amount within the set bounds
    pub fn matches_amount(&self, txn: &Transaction) -> bool {
        self.min_amount.map_or(true, |min| txn.amount >= min)
            && self.max_amount.map_or(true, |max| txn.amount <= max)
    }

    /// Date within `[start_date, end_date]`
    ///
    /// Only applied when both bounds are set. A single bound is ignored.
    pub fn matches_date(&self, txn: &Transaction) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => txn.date >= start && txn.date <= end,
            _ => true,
        }
    }

    /// All predicates hold
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.matches_name(txn) && self.matches_amount(txn) && self.matches_date(txn)
    }
}

/// Coerce amount text to a bound
///
/// Blank, unparseable and non-finite input all mean "no constraint".
pub fn parse_amount(input: &str) -> Option<f64> {
    let s = input.trim();
    let s = s.strip_prefix('$').unwrap_or(s);
    if s.is_empty() {
        return None;
    }

    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
