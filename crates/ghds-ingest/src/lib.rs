//! Loading of repository/client datasets for validation.

pub mod csv;
pub mod error;
pub mod polars_utils;

pub use csv::{MAX_CSV_FILE_SIZE, read_dataset, read_dataset_with_limit, validate_encoding};
pub use error::{IngestError, Result};
pub use polars_utils::{
    any_to_f64, any_to_int, any_to_string, format_numeric, is_null, parse_f64,
};
