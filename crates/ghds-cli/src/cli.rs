//! CLI argument definitions.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use ghds_validate::{NumericColumn, parse_timestamp};

#[derive(Parser)]
#[command(
    name = "ghds",
    version,
    about = "Validate GitHub repository and client datasets",
    long_about = "Data-quality gate for GitHub repository/client datasets.\n\n\
                  Checks clone and web URLs, date formats and windows, numeric\n\
                  lower bounds and repository name formats column by column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the columns of a dataset CSV file.
    Check(CheckArgs),

    /// List the columns each validator accepts.
    Columns,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Dataset CSV with a header row.
    #[arg(value_name = "CSV")]
    pub dataset: PathBuf,

    /// JSON plan listing the checks to run (default: inferred from the columns).
    #[arg(long = "plan", value_name = "FILE")]
    pub plan: Option<PathBuf>,

    /// Earliest accepted date for every date column (e.g. 2015-01-01).
    #[arg(
        long = "since",
        value_name = "DATE",
        value_parser = parse_since,
        conflicts_with = "plan"
    )]
    pub since: Option<DateTime<Utc>>,

    /// Lower bound for a numeric column, as COLUMN=N (repeatable).
    #[arg(
        long = "min",
        value_name = "COLUMN=N",
        value_parser = parse_minimum,
        conflicts_with = "plan"
    )]
    pub minimums: Vec<(NumericColumn, i64)>,

    /// Write a JSON report of every check to this path.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_since(value: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(value).ok_or_else(|| format!("'{value}' is not a date (expected yyyy-MM-dd)"))
}

fn parse_minimum(value: &str) -> Result<(NumericColumn, i64), String> {
    let (column, limit) = value
        .split_once('=')
        .ok_or_else(|| format!("'{value}' must look like COLUMN=N"))?;
    let column = column.trim().parse::<NumericColumn>().map_err(|e| e.to_string())?;
    let limit = limit
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid bound '{limit}': {e}"))?;
    Ok((column, limit))
}
