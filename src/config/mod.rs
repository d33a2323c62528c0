//! Configuration module for txfilter
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Logger setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::TxFilterPaths;
pub use settings::Settings;
