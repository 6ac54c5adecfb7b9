//! Error types for column validation.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by validators.
///
/// `InvalidSelector` is raised before any dataset access. Every other
/// variant is a boundary failure coming from the data itself.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Column name outside a validator's allow-list.
    #[error("invalid {kind} '{value}' (expected one of: {allowed})")]
    InvalidSelector {
        kind: &'static str,
        value: String,
        allowed: String,
    },

    /// Missing column or other dataframe failure.
    #[error(transparent)]
    DataFrame(#[from] PolarsError),

    /// String predicate applied to a non-string column.
    #[error("column '{column}' has type {dtype}, expected strings")]
    NotAString { column: String, dtype: String },

    /// A value that cannot be read as a timestamp.
    #[error("column '{column}' row {row}: cannot parse '{value}' as a date")]
    DateParse {
        column: String,
        row: usize,
        value: String,
    },

    /// A value that cannot be read as a number.
    #[error("column '{column}' row {row}: '{value}' is not numeric")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidateError {
    /// True when the error is a rejected selector rather than a data failure.
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, Self::InvalidSelector { .. })
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_display() {
        let err = ValidateError::InvalidSelector {
            kind: "date column",
            value: "updatedAt".to_string(),
            allowed: "createdAt, pushedAt, publishedAt".to_string(),
        };
        assert!(err.is_invalid_selector());
        assert_eq!(
            err.to_string(),
            "invalid date column 'updatedAt' (expected one of: createdAt, pushedAt, publishedAt)"
        );
    }

    #[test]
    fn test_polars_error_is_boundary() {
        let err: ValidateError = PolarsError::ColumnNotFound("owner".into()).into();
        assert!(!err.is_invalid_selector());
    }
}
