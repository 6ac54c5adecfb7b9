//! The column validator: runs checks and reports their outcomes.

use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;

use crate::checks::{dates, numeric, repo, urls, value};
use crate::error::{Result, ValidateError};
use crate::report::{CheckKind, CheckOutcome, Reporter, TracingReporter};
use crate::selector::{DateColumn, NumericColumn, RepoColumn, UrlColumn};
use crate::time::{Clock, SystemClock};
use crate::value::ExpectedValue;

/// Runs column checks over a dataset.
///
/// Each check reduces a per-row predicate to one boolean (all rows must
/// pass), hands a [`CheckOutcome`] per sub-check to the reporter and
/// returns the boolean. The dataset is only borrowed.
#[derive(Debug, Clone, Default)]
pub struct ColumnValidator<R = TracingReporter, C = SystemClock> {
    reporter: R,
    clock: C,
}

impl ColumnValidator {
    /// Validator logging through `tracing` and reading the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Reporter, C: Clock> ColumnValidator<R, C> {
    pub fn with_reporter<R2: Reporter>(self, reporter: R2) -> ColumnValidator<R2, C> {
        ColumnValidator {
            reporter,
            clock: self.clock,
        }
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> ColumnValidator<R, C2> {
        ColumnValidator {
            reporter: self.reporter,
            clock,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn emit(
        &mut self,
        kind: CheckKind,
        column: &str,
        label: &str,
        failed_rows: Vec<usize>,
    ) -> bool {
        let outcome = CheckOutcome::new(kind, column, label, failed_rows);
        self.reporter.report(&outcome);
        outcome.passed
    }

    /// Check scheme, authority and full path of every URL in `column`.
    ///
    /// The path is rebuilt from `owner`/`name`, or `cowner`/`cname` for
    /// client columns. Each sub-check is reported; the result is their AND.
    pub fn validate_urls(&mut self, column: UrlColumn, df: &DataFrame) -> Result<bool> {
        let name = column.as_str();

        let failed = urls::scheme_failures(df, column)?;
        let scheme_check = self.emit(CheckKind::Scheme, name, "Records have right scheme", failed);

        let failed = urls::authority_failures(df, column)?;
        let authority_check =
            self.emit(CheckKind::Authority, name, "Records have right authority", failed);

        let failed = urls::path_failures(df, column)?;
        let path_check = self.emit(CheckKind::Path, name, "Records have right path", failed);

        Ok(scheme_check && authority_check && path_check)
    }

    /// Check every value starts with a `yyyy-MM-dd` date.
    pub fn validate_date(&mut self, column: DateColumn, df: &DataFrame) -> Result<bool> {
        let failed = dates::format_failures(df, column)?;
        Ok(self.emit(
            CheckKind::DateFormat,
            column.as_str(),
            "Records have right format",
            failed,
        ))
    }

    /// Check every date lies in `[limit, now]`, both ends inclusive.
    ///
    /// "now" is read from the validator's clock once per call.
    pub fn validate_limit_date(
        &mut self,
        limit: DateTime<Utc>,
        column: DateColumn,
        df: &DataFrame,
    ) -> Result<bool> {
        let timestamps = dates::parse_column(df, column)?;

        let failed = dates::window_failures(&timestamps, |value| value >= limit);
        let limit_check = self.emit(
            CheckKind::LowerBound,
            column.as_str(),
            &format!("Records appear after {limit}"),
            failed,
        );

        let present = self.clock.now();
        let failed = dates::window_failures(&timestamps, |value| value <= present);
        let present_check = self.emit(
            CheckKind::UpperBound,
            column.as_str(),
            &format!("Records appear before {present}"),
            failed,
        );

        Ok(limit_check && present_check)
    }

    /// Check every value is at least `limit`.
    pub fn validate_limit_num(
        &mut self,
        limit: i64,
        column: NumericColumn,
        df: &DataFrame,
    ) -> Result<bool> {
        let failed = numeric::threshold_failures(df, column, limit)?;
        Ok(self.emit(
            CheckKind::Threshold,
            column.as_str(),
            &format!("Records have at least {limit}"),
            failed,
        ))
    }

    /// Check `baseRepo` equals `owner + "/" + name` on every row.
    ///
    /// Only `baseRepo` is accepted; `headRepo` fails as an invalid selector.
    pub fn validate_repo_name(&mut self, column: RepoColumn, df: &DataFrame) -> Result<bool> {
        if column != RepoColumn::BaseRepo {
            return Err(ValidateError::InvalidSelector {
                kind: "repository name column",
                value: column.to_string(),
                allowed: RepoColumn::BaseRepo.to_string(),
            });
        }
        let failed = repo::name_failures(df, column)?;
        Ok(self.emit(
            CheckKind::RepoName,
            column.as_str(),
            "Records have right repo name",
            failed,
        ))
    }

    /// Check every value is shaped like `owner/name`.
    pub fn validate_repo_name_format(
        &mut self,
        column: RepoColumn,
        df: &DataFrame,
    ) -> Result<bool> {
        let failed = repo::format_failures(df, column)?;
        Ok(self.emit(
            CheckKind::RepoNameFormat,
            column.as_str(),
            "Records have right repo name format",
            failed,
        ))
    }

    /// Check every cell of any column equals `expected`.
    pub fn validate_value(
        &mut self,
        expected: impl Into<ExpectedValue>,
        column: &str,
        df: &DataFrame,
    ) -> Result<bool> {
        let expected = expected.into();
        let failed = value::value_failures(df, column, &expected)?;
        Ok(self.emit(
            CheckKind::Value,
            column,
            &format!("Records have value {expected}"),
            failed,
        ))
    }
}
