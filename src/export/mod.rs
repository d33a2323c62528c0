//! Export module for txfilter
//!
//! Writes the filtered view to disk:
//! - XLSX: single-sheet workbook (the default)
//! - CSV: same columns, plain text

pub mod csv;
pub mod xlsx;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{TxFilterError, TxFilterResult};
use crate::models::Transaction;

pub use self::csv::export_transactions_csv;
pub use self::xlsx::{export_xlsx, export_xlsx_to_buffer, DEFAULT_FILE_NAME, DEFAULT_SHEET_NAME};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook
    #[default]
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl ExportFormat {
    /// Guess the format from a file extension, defaulting to XLSX
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }
}

/// Where an export lands when no explicit path is given
pub fn default_export_path(settings: &Settings) -> PathBuf {
    let dir = settings
        .export_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(&settings.export_file_name)
}

/// Write `rows` to `path` in the given format
pub fn export_view(
    rows: &[Transaction],
    path: &Path,
    format: ExportFormat,
    settings: &Settings,
) -> TxFilterResult<()> {
    match format {
        ExportFormat::Xlsx => export_xlsx(rows, path, &settings.sheet_name),
        ExportFormat::Csv => {
            let file = File::create(path).map_err(|e| {
                TxFilterError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            export_transactions_csv(rows, BufWriter::new(file))
        }
    }
}
