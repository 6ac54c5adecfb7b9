//! Check outcomes and the sinks they are reported to.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::error::Result;

/// The individual predicate a validator evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Scheme,
    Authority,
    Path,
    DateFormat,
    LowerBound,
    UpperBound,
    Threshold,
    RepoName,
    RepoNameFormat,
    Value,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Scheme => "scheme",
            CheckKind::Authority => "authority",
            CheckKind::Path => "path",
            CheckKind::DateFormat => "date_format",
            CheckKind::LowerBound => "lower_bound",
            CheckKind::UpperBound => "upper_bound",
            CheckKind::Threshold => "threshold",
            CheckKind::RepoName => "repo_name",
            CheckKind::RepoNameFormat => "repo_name_format",
            CheckKind::Value => "value",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate result of one predicate over one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub column: String,
    /// Status line, e.g. `Records have right scheme: true`.
    pub message: String,
    pub passed: bool,
    /// Zero-based indices of the rows that failed the predicate.
    pub failed_rows: Vec<usize>,
}

impl CheckOutcome {
    /// Build an outcome from the failing rows. It passes iff none failed.
    pub fn new(
        kind: CheckKind,
        column: impl Into<String>,
        label: &str,
        failed_rows: Vec<usize>,
    ) -> Self {
        let passed = failed_rows.is_empty();
        Self {
            kind,
            column: column.into(),
            message: format!("{label}: {passed}"),
            passed,
            failed_rows,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.failed_rows.len()
    }
}

/// Receives every outcome a validator computes.
pub trait Reporter {
    fn report(&mut self, outcome: &CheckOutcome);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, outcome: &CheckOutcome) {
        (**self).report(outcome);
    }
}

impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn report(&mut self, outcome: &CheckOutcome) {
        self.0.report(outcome);
        self.1.report(outcome);
    }
}

/// Emits one tracing event per outcome. Failed checks log at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, outcome: &CheckOutcome) {
        if outcome.passed {
            tracing::info!(
                check = %outcome.kind,
                column = %outcome.column,
                passed = outcome.passed,
                "{}",
                outcome.message
            );
        } else {
            tracing::warn!(
                check = %outcome.kind,
                column = %outcome.column,
                passed = outcome.passed,
                failed_rows = outcome.failed_count(),
                "{}",
                outcome.message
            );
        }
    }
}

/// Keeps outcomes in memory for summaries and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    outcomes: Vec<CheckOutcome>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<CheckOutcome> {
        self.outcomes
    }

    /// Status lines in report order.
    pub fn messages(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .map(|outcome| outcome.message.as_str())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, outcome: &CheckOutcome) {
        self.outcomes.push(outcome.clone());
    }
}

const REPORT_SCHEMA: &str = "ghds.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;
/// Row indices listed per check in the JSON report.
const MAX_REPORTED_ROWS: usize = 100;

#[derive(Debug, Serialize)]
struct ValidationReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    dataset: String,
    passed: bool,
    checks: Vec<CheckJson<'a>>,
}

#[derive(Debug, Serialize)]
struct CheckJson<'a> {
    kind: CheckKind,
    column: &'a str,
    message: &'a str,
    passed: bool,
    failed_count: usize,
    failed_rows: &'a [usize],
}

/// Write a JSON report of the outcomes to `output_path`.
pub fn write_validation_report_json(
    output_path: &Path,
    dataset: &str,
    outcomes: &[CheckOutcome],
) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        dataset: dataset.to_string(),
        passed: outcomes.iter().all(|outcome| outcome.passed),
        checks: outcomes
            .iter()
            .map(|outcome| CheckJson {
                kind: outcome.kind,
                column: &outcome.column,
                message: &outcome.message,
                passed: outcome.passed,
                failed_count: outcome.failed_count(),
                failed_rows: &outcome.failed_rows
                    [..outcome.failed_rows.len().min(MAX_REPORTED_ROWS)],
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}
