//! CSV dataset reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows sampled by polars when inferring column types.
const INFER_SCHEMA_ROWS: usize = 1000;

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reject files starting with a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted; polars strips it from the first header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

fn validate_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }
    if df.get_column_names().iter().any(|name| name.trim().is_empty()) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Read a dataset CSV with a single header row into a `DataFrame`.
pub fn read_dataset(path: &Path) -> Result<DataFrame> {
    read_dataset_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Like [`read_dataset`] with an explicit file size limit.
pub fn read_dataset_with_limit(path: &Path, max_size: u64) -> Result<DataFrame> {
    check_file_size(path, max_size)?;
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_shape(&df, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded dataset"
    );
    Ok(df)
}
