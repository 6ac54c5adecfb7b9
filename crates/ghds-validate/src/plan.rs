//! Validation plans: the ordered checks run over one dataset.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::report::Reporter;
use crate::selector::{DateColumn, NumericColumn, RepoColumn, UrlColumn};
use crate::time::{Clock, serde_timestamp};
use crate::validator::ColumnValidator;
use crate::value::ExpectedValue;

/// One validator call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum PlanCheck {
    Urls {
        column: UrlColumn,
    },
    Date {
        column: DateColumn,
    },
    LimitDate {
        column: DateColumn,
        #[serde(with = "serde_timestamp")]
        limit: DateTime<Utc>,
    },
    LimitNum {
        column: NumericColumn,
        limit: i64,
    },
    RepoName {
        column: RepoColumn,
    },
    RepoNameFormat {
        column: RepoColumn,
    },
    Value {
        column: String,
        expected: ExpectedValue,
    },
}

impl PlanCheck {
    pub fn name(&self) -> &'static str {
        match self {
            PlanCheck::Urls { .. } => "urls",
            PlanCheck::Date { .. } => "date",
            PlanCheck::LimitDate { .. } => "limit_date",
            PlanCheck::LimitNum { .. } => "limit_num",
            PlanCheck::RepoName { .. } => "repo_name",
            PlanCheck::RepoNameFormat { .. } => "repo_name_format",
            PlanCheck::Value { .. } => "value",
        }
    }

    pub fn column(&self) -> &str {
        match self {
            PlanCheck::Urls { column } => column.as_str(),
            PlanCheck::Date { column } | PlanCheck::LimitDate { column, .. } => column.as_str(),
            PlanCheck::LimitNum { column, .. } => column.as_str(),
            PlanCheck::RepoName { column } | PlanCheck::RepoNameFormat { column } => {
                column.as_str()
            }
            PlanCheck::Value { column, .. } => column.as_str(),
        }
    }

    /// Run this check with `validator`.
    pub fn run<R: Reporter, C: Clock>(
        &self,
        df: &DataFrame,
        validator: &mut ColumnValidator<R, C>,
    ) -> Result<bool> {
        match self {
            PlanCheck::Urls { column } => validator.validate_urls(*column, df),
            PlanCheck::Date { column } => validator.validate_date(*column, df),
            PlanCheck::LimitDate { column, limit } => {
                validator.validate_limit_date(*limit, *column, df)
            }
            PlanCheck::LimitNum { column, limit } => {
                validator.validate_limit_num(*limit, *column, df)
            }
            PlanCheck::RepoName { column } => validator.validate_repo_name(*column, df),
            PlanCheck::RepoNameFormat { column } => {
                validator.validate_repo_name_format(*column, df)
            }
            PlanCheck::Value { column, expected } => {
                validator.validate_value(expected.clone(), column, df)
            }
        }
    }
}

impl fmt::Display for PlanCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.column())
    }
}

/// Errors loading a plan file.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid plan {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Options for [`ValidationPlan::infer`].
#[derive(Debug, Clone, Default)]
pub struct InferOptions {
    /// Lower bound for every date column present.
    pub since: Option<DateTime<Utc>>,
    /// Lower bounds for numeric columns.
    pub minimums: Vec<(NumericColumn, i64)>,
}

/// Ordered list of checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationPlan {
    pub checks: Vec<PlanCheck>,
}

/// Per-check results of a plan run.
#[derive(Debug, Clone, Default)]
pub struct PlanResult {
    pub results: Vec<(PlanCheck, bool)>,
}

impl PlanResult {
    pub fn passed(&self) -> bool {
        self.results.iter().all(|(_, passed)| *passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &PlanCheck> {
        self.results
            .iter()
            .filter(|(_, passed)| !passed)
            .map(|(check, _)| check)
    }
}

impl ValidationPlan {
    pub fn new(checks: Vec<PlanCheck>) -> Self {
        Self { checks }
    }

    /// Load a JSON plan. Unknown column names are rejected here.
    pub fn load(path: &Path) -> std::result::Result<Self, PlanError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PlanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| PlanError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Derive a plan from the columns present in `df`.
    ///
    /// URL checks need their paired owner/name columns; the `baseRepo`
    /// name check needs `owner` and `name`. Date window checks are added
    /// only with `options.since`. Numeric bounds come from `options.minimums`
    /// whether or not the column exists.
    pub fn infer(df: &DataFrame, options: &InferOptions) -> Self {
        let present: BTreeSet<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let has = |name: &str| present.contains(name);
        let mut checks = Vec::new();

        for &column in UrlColumn::ALL {
            if has(column.as_str()) && has(column.owner_column()) && has(column.name_column()) {
                checks.push(PlanCheck::Urls { column });
            }
        }
        for &column in DateColumn::ALL {
            if !has(column.as_str()) {
                continue;
            }
            checks.push(PlanCheck::Date { column });
            if let Some(limit) = options.since {
                checks.push(PlanCheck::LimitDate { column, limit });
            }
        }
        for &(column, limit) in &options.minimums {
            checks.push(PlanCheck::LimitNum { column, limit });
        }
        for &column in RepoColumn::ALL {
            if !has(column.as_str()) {
                continue;
            }
            if column == RepoColumn::BaseRepo && has("owner") && has("name") {
                checks.push(PlanCheck::RepoName { column });
            }
            checks.push(PlanCheck::RepoNameFormat { column });
        }

        Self { checks }
    }

    /// Run every check in order. The first boundary error aborts the run.
    pub fn run<R: Reporter, C: Clock>(
        &self,
        df: &DataFrame,
        validator: &mut ColumnValidator<R, C>,
    ) -> Result<PlanResult> {
        let mut result = PlanResult::default();
        for check in &self.checks {
            let span = tracing::info_span!("check", check = %check);
            let _guard = span.enter();
            let passed = check.run(df, validator)?;
            tracing::debug!(passed, "check finished");
            result.results.push((check.clone(), passed));
        }
        Ok(result)
    }
}
