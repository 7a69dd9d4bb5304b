//! One-shot async file reading.

use std::path::Path;

use crate::error::{ImportError, Result};

/// Maximum file size accepted for import (50 MB).
pub const MAX_IMPORT_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Reads a user-supplied import file into a string.
///
/// Single-shot: the whole file is read in one operation with no partial
/// or streaming reads, no cancellation, and no timeout (callers needing
/// bounded latency add their own). A UTF-8 BOM is stripped; UTF-16 input
/// is rejected since the pipeline is UTF-8 only.
pub async fn read_import_file(path: &Path) -> Result<String> {
    read_import_file_with_limit(path, MAX_IMPORT_FILE_SIZE).await
}

/// Reads an import file with a custom size limit.
pub async fn read_import_file_with_limit(path: &Path, max_size: u64) -> Result<String> {
    let metadata = tokio::fs::metadata(path).await.map_err(|e| map_io(path, e))?;
    if metadata.len() > max_size {
        return Err(ImportError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    let bytes = tokio::fs::read(path).await.map_err(|e| map_io(path, e))?;

    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(ImportError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(ImportError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let content = String::from_utf8(bytes).map_err(|_| ImportError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding: "non-UTF-8",
    })?;

    // Strip UTF-8 BOM if present
    let content = match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_owned(),
        None => content,
    };

    tracing::debug!(path = %path.display(), bytes = content.len(), "read import file");
    Ok(content)
}

fn map_io(path: &Path, error: std::io::Error) -> ImportError {
    if error.kind() == std::io::ErrorKind::NotFound {
        ImportError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        ImportError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
