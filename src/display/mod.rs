//! Display formatting for terminal output
//!
//! Formats the filtered view for the non-interactive CLI.

pub mod transaction;

pub use transaction::{format_amount, format_criteria, format_transaction_table};
