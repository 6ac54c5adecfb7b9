//! Date format and date window checks.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;
use regex::Regex;

use crate::error::{Result, ValidateError};
use crate::selector::DateColumn;
use crate::time::parse_timestamp;

use super::{display_cells, failing_rows};

/// `yyyy-MM-dd` prefix; anything may follow (times, offsets).
pub static DATE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("Invalid date prefix regex"));

/// Rows whose value does not start with a `yyyy-MM-dd` date.
pub fn format_failures(df: &DataFrame, column: DateColumn) -> Result<Vec<usize>> {
    let cells = display_cells(df, column.as_str())?;
    Ok(failing_rows(&cells, |_, value| {
        DATE_PREFIX_REGEX.is_match(value)
    }))
}

/// Parsed timestamps of a date column. Null cells are `None`.
///
/// A non-null value that is not a recognisable date is an error.
pub fn parse_column(df: &DataFrame, column: DateColumn) -> Result<Vec<Option<DateTime<Utc>>>> {
    display_cells(df, column.as_str())?
        .into_iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            None => Ok(None),
            Some(value) => match parse_timestamp(&value) {
                Some(parsed) => Ok(Some(parsed)),
                None => Err(ValidateError::DateParse {
                    column: column.to_string(),
                    row,
                    value,
                }),
            },
        })
        .collect()
}

/// Rows with a timestamp for which `keep` is false, plus null rows.
pub fn window_failures<F>(timestamps: &[Option<DateTime<Utc>>], keep: F) -> Vec<usize>
where
    F: Fn(DateTime<Utc>) -> bool,
{
    timestamps
        .iter()
        .enumerate()
        .filter_map(|(idx, timestamp)| match timestamp {
            Some(value) if keep(*value) => None,
            _ => Some(idx),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_tolerates_suffix() {
        assert!(DATE_PREFIX_REGEX.is_match("2020-01-01"));
        assert!(DATE_PREFIX_REGEX.is_match("2020-01-01T10:00:00Z"));
        assert!(!DATE_PREFIX_REGEX.is_match("20-01-01"));
        assert!(!DATE_PREFIX_REGEX.is_match(" 2020-01-01"));
        assert!(!DATE_PREFIX_REGEX.is_match("2020/01/01"));
    }
}
