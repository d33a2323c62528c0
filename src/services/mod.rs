//! Service layer for txfilter
//!
//! State and operations sitting between the UI surfaces and the models.

pub mod panel;

pub use panel::FilterPanel;
