//! Error types for file import operations.
//!
//! Only failures that prevent the pipeline from producing an
//! [`ImportResult`](eis_model::ImportResult) at all live here (unreadable
//! files, unsupported formats). Structural parse failures are reported
//! through the result's issue list instead, so callers always get one
//! uniform error surface per attempt.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur before parsing starts.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Import file not found.
    #[error("import file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the import size limit.
    #[error("file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File encoding is not supported (UTF-8 only).
    #[error("unsupported {encoding} encoding in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File extension is neither `.csv` nor `.json`.
    #[error("unsupported file format: {path} (expected a .csv or .json file)")]
    UnsupportedFormat { path: PathBuf },
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImportError::FileNotFound {
            path: PathBuf::from("/tmp/expenses.csv"),
        };
        assert_eq!(err.to_string(), "import file not found: /tmp/expenses.csv");
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ImportError::UnsupportedFormat {
            path: PathBuf::from("expenses.xlsx"),
        };
        assert!(err.to_string().contains(".csv or .json"));
    }
}
