//! Terminal User Interface module
//!
//! Hosts the filter panel in the terminal using ratatui: a bar of filter
//! controls, the results table, a date range dialog, and export toasts.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
