//! txfilter - Terminal transaction filter with spreadsheet export
//!
//! Filters a compiled-in list of bank transactions by date range, payee
//! name and amount range, and exports the filtered view to an `.xlsx`
//! workbook.
//!
//! # Architecture
//!
//! - `models`: transaction record, canonical dataset, filter criteria
//! - `filter`: the pure filter engine
//! - `services`: the filter panel state (criteria plus filtered view)
//! - `export`: XLSX and CSV writers
//! - `display`: table formatting for the CLI
//! - `cli`: non-interactive commands
//! - `tui`: the interactive terminal panel
//! - `config`: paths, settings and logging
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use txfilter::services::FilterPanel;
//!
//! let mut panel = FilterPanel::default();
//! panel.set_name_pattern("david");
//! assert_eq!(panel.apply_filter().len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{TxFilterError, TxFilterResult};
