//! Numeric lower-bound check.

use polars::prelude::DataFrame;

use ghds_ingest::{any_to_f64, any_to_int, any_to_string, is_null};

use crate::error::{Result, ValidateError};
use crate::selector::NumericColumn;

/// Rows whose value is below `limit`. Nulls fail; non-numeric text is an error.
///
/// Integer cells and integer text compare exactly; floats compare as f64.
pub fn threshold_failures(
    df: &DataFrame,
    column: NumericColumn,
    limit: i64,
) -> Result<Vec<usize>> {
    let series = df.column(column.as_str())?;
    let mut failed = Vec::new();
    for idx in 0..series.len() {
        let value = series.get(idx)?;
        if is_null(&value) {
            failed.push(idx);
            continue;
        }
        let passed = match any_to_int(&value) {
            Some(number) => number >= i128::from(limit),
            None => match any_to_f64(value.clone()) {
                Some(number) => number >= limit as f64,
                None => {
                    return Err(ValidateError::NotNumeric {
                        column: column.to_string(),
                        row: idx,
                        value: any_to_string(value),
                    });
                }
            },
        };
        if !passed {
            failed.push(idx);
        }
    }
    Ok(failed)
}
