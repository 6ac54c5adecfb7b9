//! End-to-end tests for the `check` command over CSV files on disk.

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use ghds_cli::commands::{run_check, supported_columns};
use ghds_cli::types::CheckOptions;
use ghds_validate::{CheckKind, NumericColumn};

const CLIENTS_CSV: &str = "\
owner,name,url,sshUrl,pushedAt,stars,baseRepo
octo,cat,https://github.com/octo/cat,ssh://git@github.com:octo/cat.git,2021-02-03T04:05:06Z,15,octo/cat
tokio-rs,tokio,https://github.com/tokio-rs/tokio,ssh://git@github.com:tokio-rs/tokio.git,2022-01-01,30000,tokio-rs/tokio
";

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(dataset: &Path) -> CheckOptions {
    CheckOptions {
        dataset: dataset.to_path_buf(),
        ..CheckOptions::default()
    }
}

#[test]
fn clean_dataset_passes_inferred_plan() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_csv(&dir, "clients.csv", CLIENTS_CSV);

    let result = run_check(&options(&dataset)).unwrap();

    assert!(result.passed());
    assert_eq!(result.records, 2);
    assert!(result.report.is_none());
    // urls(sshUrl), urls(url), date(pushedAt), repo_name, repo_name_format
    assert_eq!(result.plan.results.len(), 5);
    assert!(result.outcomes.iter().all(|outcome| outcome.passed));
}

#[test]
fn bounds_from_options_are_checked() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_csv(&dir, "clients.csv", CLIENTS_CSV);

    let result = run_check(&CheckOptions {
        since: Some(Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap()),
        minimums: vec![(NumericColumn::Stars, 100)],
        ..options(&dataset)
    })
    .unwrap();

    assert!(!result.passed());
    let failed: Vec<_> = result
        .outcomes
        .iter()
        .filter(|outcome| !outcome.passed)
        .map(|outcome| (outcome.kind, outcome.failed_rows.clone()))
        .collect();
    assert_eq!(
        failed,
        vec![(CheckKind::LowerBound, vec![0]), (CheckKind::Threshold, vec![0])]
    );
}

#[test]
fn report_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_csv(
        &dir,
        "clients.csv",
        "owner,name,url\nocto,cat,http://github.com/octo/cat\n",
    );
    let report_path = dir.path().join("out").join("report.json");

    let result = run_check(&CheckOptions {
        report: Some(report_path.clone()),
        ..options(&dataset)
    })
    .unwrap();

    assert!(!result.passed());
    assert_eq!(result.report.as_deref(), Some(report_path.as_path()));
    let payload: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(payload["schema"], "ghds.validation-report");
    assert_eq!(payload["passed"], false);
    let checks = payload["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 3);
    assert_eq!(checks[0]["kind"], "scheme");
    assert_eq!(checks[0]["failed_rows"], serde_json::json!([0]));
}

#[test]
fn explicit_plan_replaces_inference() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_csv(&dir, "clients.csv", CLIENTS_CSV);
    let plan = dir.path().join("plan.json");
    fs::write(
        &plan,
        r#"{ "checks": [ { "check": "limit_num", "column": "stars", "limit": 10 } ] }"#,
    )
    .unwrap();

    let result = run_check(&CheckOptions {
        plan: Some(plan),
        ..options(&dataset)
    })
    .unwrap();

    assert!(result.passed());
    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.outcomes[0].message, "Records have at least 10: true");
}

#[test]
fn plan_file_wins_over_inference_options() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_csv(&dir, "clients.csv", CLIENTS_CSV);
    let plan = dir.path().join("plan.json");
    fs::write(
        &plan,
        r#"{ "checks": [ { "check": "date", "column": "pushedAt" } ] }"#,
    )
    .unwrap();

    let result = run_check(&CheckOptions {
        plan: Some(plan),
        since: Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
        minimums: vec![(NumericColumn::Stars, 1_000_000)],
        ..options(&dataset)
    })
    .unwrap();

    assert!(result.passed());
    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.outcomes[0].kind, CheckKind::DateFormat);
}

#[test]
fn missing_dataset_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = run_check(&options(&dir.path().join("absent.csv"))).unwrap_err();
    assert!(format!("{error:#}").contains("load dataset"));
}

#[test]
fn missing_column_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_csv(&dir, "repos.csv", "owner,name\nocto,cat\n");

    let error = run_check(&CheckOptions {
        minimums: vec![(NumericColumn::Stars, 1)],
        ..options(&dataset)
    })
    .unwrap_err();
    assert!(format!("{error:#}").contains("validate"));
}

#[test]
fn columns_listing_covers_every_validator() {
    let listing = supported_columns();
    let validators: Vec<_> = listing.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        validators,
        vec![
            "urls",
            "date, limit_date",
            "limit_num",
            "repo_name",
            "repo_name_format",
            "value"
        ]
    );
    assert!(listing[0].1.contains("csshUrl"));
    assert_eq!(listing[3].1, "baseRepo");
}
