//! Core data models for txfilter
//!
//! The transaction record, the canonical dataset it lives in, and the
//! criteria the filter panel applies to it.

pub mod criteria;
pub mod dataset;
pub mod transaction;

pub use criteria::{parse_amount, FilterCriteria};
pub use dataset::Dataset;
pub use transaction::{parse_user_date, Transaction, DISPLAY_DATE_FORMAT, ISO_DATE_FORMAT};
