use std::path::PathBuf;

use chrono::{DateTime, Utc};

use ghds_validate::{CheckOutcome, NumericColumn, PlanResult};

/// Inputs of one `check` run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub dataset: PathBuf,
    pub plan: Option<PathBuf>,
    pub since: Option<DateTime<Utc>>,
    pub minimums: Vec<(NumericColumn, i64)>,
    pub report: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub dataset: PathBuf,
    pub records: usize,
    pub plan: PlanResult,
    pub outcomes: Vec<CheckOutcome>,
    pub report: Option<PathBuf>,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.plan.passed()
    }
}
