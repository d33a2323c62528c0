//! Filter engine
//!
//! A pure mapping from (dataset, criteria) to the filtered view.

pub mod engine;

pub use engine::apply;
