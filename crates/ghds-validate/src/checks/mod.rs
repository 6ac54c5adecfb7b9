//! Row predicates behind each validator.
//!
//! Every function returns the indices of the rows that fail its predicate;
//! an empty list means the aggregate check passes.

pub mod dates;
pub mod numeric;
pub mod repo;
pub mod urls;
pub mod value;

use polars::prelude::{AnyValue, DataFrame, DataType};

use ghds_ingest::any_to_string;

use crate::error::{Result, ValidateError};

/// Cells of a string column. Null cells are `None`.
pub(crate) fn string_cells(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let series = df.column(column)?;
    if !matches!(series.dtype(), DataType::String | DataType::Null) {
        return Err(ValidateError::NotAString {
            column: column.to_string(),
            dtype: series.dtype().to_string(),
        });
    }
    display_cells(df, column)
}

/// String form of every cell regardless of column type. Null cells are `None`.
pub(crate) fn display_cells(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let series = df.column(column)?;
    let mut cells = Vec::with_capacity(series.len());
    for idx in 0..series.len() {
        cells.push(match series.get(idx)? {
            AnyValue::Null => None,
            value => Some(any_to_string(value)),
        });
    }
    Ok(cells)
}

/// Owner/name pairs joined as `owner/name`, stringifying each side.
///
/// A row where either side is null has no path.
pub(crate) fn repo_paths(
    df: &DataFrame,
    owner: &str,
    name: &str,
) -> Result<Vec<Option<String>>> {
    let owners = display_cells(df, owner)?;
    let names = display_cells(df, name)?;
    Ok(owners
        .into_iter()
        .zip(names)
        .map(|(owner, name)| Some(format!("{}/{}", owner?, name?)))
        .collect())
}

/// Indices of the cells rejected by `predicate`. Null cells always fail.
pub(crate) fn failing_rows<F>(cells: &[Option<String>], mut predicate: F) -> Vec<usize>
where
    F: FnMut(usize, &str) -> bool,
{
    cells
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| match cell {
            Some(value) if predicate(idx, value) => None,
            _ => Some(idx),
        })
        .collect()
}
