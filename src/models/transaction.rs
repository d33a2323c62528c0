//! Transaction model
//!
//! A bank transaction as shown in the filter panel: a calendar date, the
//! payee name, and an amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// strftime format of seed and CLI dates (`2023-03-15`)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// strftime format dates are displayed and exported in (`03-15-2023`)
pub const DISPLAY_DATE_FORMAT: &str = "%m-%d-%Y";

/// A single bank transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, serialized in display form
    #[serde(with = "display_date")]
    pub date: NaiveDate,

    /// Payee name
    pub name: String,

    /// Amount in currency units
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, name: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            name: name.into(),
            amount,
        }
    }

    /// Build a transaction from an ISO (`YYYY-MM-DD`) date string
    ///
    /// Returns `None` if the date does not parse.
    pub fn from_iso(date: &str, name: impl Into<String>, amount: f64) -> Option<Self> {
        let date = NaiveDate::parse_from_str(date, ISO_DATE_FORMAT).ok()?;
        Some(Self::new(date, name, amount))
    }

    /// The date rendered in display form
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.display_date(), self.name, self.amount)
    }
}

/// Parse a display-form (`MM-DD-YYYY`) date
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DISPLAY_DATE_FORMAT).ok()
}

/// Parse a date typed by the user, accepting display form or ISO form
///
/// Anything else yields `None`, which callers treat as an unset bound.
pub fn parse_user_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    parse_display_date(s).or_else(|| NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).ok())
}

/// Serde adapter writing dates in display form
mod display_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::DISPLAY_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DISPLAY_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DISPLAY_DATE_FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iso_normalizes_to_display_form() {
        let txn = Transaction::from_iso("2023-03-15", "David Wilson", 180.9).unwrap();
        assert_eq!(txn.display_date(), "03-15-2023");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    }

    #[test]
    fn test_display_form_round_trips_to_same_date() {
        let txn = Transaction::from_iso("2023-01-02", "Jane Smith", 150.5).unwrap();
        assert_eq!(parse_display_date(&txn.display_date()), Some(txn.date));
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(Transaction::from_iso("2023-13-01", "x", 1.0).is_none());
        assert!(parse_display_date("2023-01-01").is_none());
    }

    #[test]
    fn test_parse_user_date_accepts_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2023, 2, 1);
        assert_eq!(parse_user_date("02-01-2023"), expected);
        assert_eq!(parse_user_date(" 2023-02-01 "), expected);
        assert_eq!(parse_user_date(""), None);
        assert_eq!(parse_user_date("February"), None);
    }

    #[test]
    fn test_serializes_display_date() {
        let txn = Transaction::from_iso("2023-03-03", "Chris Brown", 300.25).unwrap();
        let json = serde_json::to_string(&txn).unwrap();
        assert_eq!(
            json,
            r#"{"date":"03-03-2023","name":"Chris Brown","amount":300.25}"#
        );

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
