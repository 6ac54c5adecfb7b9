use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use ghds_ingest::read_dataset;
use ghds_validate::{
    ColumnValidator, DateColumn, InferOptions, NumericColumn, RecordingReporter, RepoColumn,
    TracingReporter, UrlColumn, ValidationPlan, write_validation_report_json,
};

use crate::types::{CheckOptions, CheckResult};

pub fn run_check(options: &CheckOptions) -> Result<CheckResult> {
    let span = info_span!("check", dataset = %options.dataset.display());
    let _guard = span.enter();

    let df = read_dataset(&options.dataset)
        .with_context(|| format!("load dataset {}", options.dataset.display()))?;
    info!(records = df.height(), columns = df.width(), "dataset loaded");

    let plan = match &options.plan {
        Some(path) => {
            if options.since.is_some() || !options.minimums.is_empty() {
                warn!(
                    plan = %path.display(),
                    "--since and --min are ignored when a plan file is given"
                );
            }
            ValidationPlan::load(path)?
        }
        None => ValidationPlan::infer(
            &df,
            &InferOptions {
                since: options.since,
                minimums: options.minimums.clone(),
            },
        ),
    };
    if plan.checks.is_empty() {
        warn!("no checks apply to this dataset");
    } else {
        info!(checks = plan.checks.len(), "running validation plan");
    }

    let mut validator =
        ColumnValidator::new().with_reporter((TracingReporter, RecordingReporter::new()));
    let result = plan
        .run(&df, &mut validator)
        .with_context(|| format!("validate {}", options.dataset.display()))?;
    let (_, recorder) = validator.into_reporter();
    let outcomes = recorder.into_outcomes();

    let report = match &options.report {
        Some(path) => Some(
            write_validation_report_json(
                path,
                &options.dataset.display().to_string(),
                &outcomes,
            )
            .with_context(|| format!("write report {}", path.display()))?,
        ),
        None => None,
    };

    Ok(CheckResult {
        dataset: options.dataset.clone(),
        records: df.height(),
        plan: result,
        outcomes,
        report,
    })
}

/// Allow-list of every validator family, as `(validator, columns)`.
pub fn supported_columns() -> Vec<(&'static str, String)> {
    vec![
        ("urls", UrlColumn::allowed()),
        ("date, limit_date", DateColumn::allowed()),
        ("limit_num", NumericColumn::allowed()),
        ("repo_name", RepoColumn::BaseRepo.to_string()),
        ("repo_name_format", RepoColumn::allowed()),
        ("value", "any column".to_string()),
    ]
}

pub fn run_columns() -> Result<()> {
    for (validator, columns) in supported_columns() {
        println!("{validator:<18} {columns}");
    }
    Ok(())
}
