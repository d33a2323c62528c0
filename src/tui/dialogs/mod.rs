//! Dialog overlays for the TUI

pub mod date_range;
pub mod help;
