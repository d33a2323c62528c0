//! Path management for txfilter
//!
//! ## Path Resolution Order
//!
//! 1. `TXFILTER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories` (`~/.config/txfilter`
//!    on Linux)
//! 3. `$HOME/.config/txfilter` when no platform directory can be determined

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TxFilterError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TXFILTER_CONFIG_DIR";

/// Manages all paths used by txfilter
#[derive(Debug, Clone)]
pub struct TxFilterPaths {
    base_dir: PathBuf,
}

impl TxFilterPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if neither the platform directories nor `HOME` can
    /// be determined.
    pub fn new() -> Result<Self, TxFilterError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base config directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("txfilter.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TxFilterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TxFilterError::Io(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, TxFilterError> {
    if let Some(dirs) = ProjectDirs::from("", "", "txfilter") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    let home = std::env::var("HOME")
        .map_err(|_| TxFilterError::Config("Could not determine home directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("txfilter"))
}
