//! User settings for txfilter
//!
//! Export naming and UI timing preferences, persisted as JSON.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TxFilterPaths;
use crate::error::TxFilterError;
use crate::export::{DEFAULT_FILE_NAME, DEFAULT_SHEET_NAME};

/// User settings for txfilter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// File name used when exporting without an explicit path
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Worksheet name inside exported workbooks
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Directory exports are written to (current directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_export_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

/// Lowest tick rate accepted from a settings file
pub const MIN_TICK_RATE_MS: u64 = 1;

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            export_file_name: default_export_file_name(),
            sheet_name: default_sheet_name(),
            export_dir: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TxFilterPaths) -> Result<Self, TxFilterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TxFilterError::Io(format!("Failed to read settings file: {}", e)))?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TxFilterError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.tick_rate_ms < MIN_TICK_RATE_MS {
                log::warn!(
                    "tick_rate_ms {} is too low, using {}",
                    settings.tick_rate_ms,
                    MIN_TICK_RATE_MS
                );
                settings.tick_rate_ms = MIN_TICK_RATE_MS;
            }

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TxFilterPaths) -> Result<(), TxFilterError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TxFilterError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TxFilterError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
