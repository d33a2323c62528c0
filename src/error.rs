//! Custom error types for txfilter
//!
//! Filtering itself never fails; these errors cover the application shell
//! around it (configuration, settings files, and export I/O).

use thiserror::Error;

/// The main error type for txfilter operations
#[derive(Error, Debug)]
pub enum TxFilterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TxFilterError {
    /// Check if this is an export error
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

impl From<std::io::Error> for TxFilterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TxFilterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for TxFilterError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for TxFilterError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for txfilter operations
pub type TxFilterResult<T> = Result<T, TxFilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TxFilterError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_export_error() {
        let err = TxFilterError::Export("disk full".into());
        assert_eq!(err.to_string(), "Export error: disk full");
        assert!(err.is_export());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TxFilterError = io_err.into();
        assert!(matches!(err, TxFilterError::Io(_)));
    }
}
