//! Exact value check.

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::value::ExpectedValue;

/// Rows whose cell differs from `expected`.
pub fn value_failures(
    df: &DataFrame,
    column: &str,
    expected: &ExpectedValue,
) -> Result<Vec<usize>> {
    let series = df.column(column)?;
    let mut failed = Vec::new();
    for idx in 0..series.len() {
        if !expected.matches(&series.get(idx)?) {
            failed.push(idx);
        }
    }
    Ok(failed)
}
