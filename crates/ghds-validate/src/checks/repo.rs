//! Repository path checks.

use std::sync::LazyLock;

use polars::prelude::DataFrame;
use regex::Regex;

use crate::error::Result;
use crate::selector::RepoColumn;

use super::{failing_rows, repo_paths, string_cells};

/// Full-match `owner/name` made of letters, digits, `.`, `_` and `-`.
pub static REPO_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+/[A-Za-z0-9._-]+$").expect("Invalid repository name regex")
});

/// Rows whose value differs from `owner + "/" + name`. Null owners or names fail.
pub fn name_failures(df: &DataFrame, column: RepoColumn) -> Result<Vec<usize>> {
    let cells = string_cells(df, column.as_str())?;
    let paths = repo_paths(df, "owner", "name")?;
    Ok(failing_rows(&cells, |idx, value| paths[idx].as_deref() == Some(value)))
}

/// Rows whose value is not shaped like `owner/name`.
pub fn format_failures(df: &DataFrame, column: RepoColumn) -> Result<Vec<usize>> {
    let cells = string_cells(df, column.as_str())?;
    Ok(failing_rows(&cells, |_, value| REPO_NAME_REGEX.is_match(value)))
}
