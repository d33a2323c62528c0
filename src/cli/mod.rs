//! CLI command handlers
//!
//! Bridges clap argument parsing with the filter panel and exporters.

pub mod export;
pub mod filter;
pub mod list;

pub use export::{handle_export_command, ExportArgs};
pub use filter::FilterArgs;
pub use list::handle_list_command;
