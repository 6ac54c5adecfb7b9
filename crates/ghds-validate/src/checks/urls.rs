//! Clone/web URL checks.

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::selector::{SSH_SCHEME, UrlColumn};

use super::{failing_rows, repo_paths, string_cells};

/// Shape every URL of a column must follow, e.g.
/// `ssh://git@github.com:owner/name.git` or `https://github.com/owner/name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlTemplate {
    pub scheme: &'static str,
    pub authority: &'static str,
    pub delimiter: char,
    pub extension: &'static str,
}

impl UrlTemplate {
    pub fn for_column(column: UrlColumn) -> Self {
        let (scheme, authority) = column.url_parts();
        let ssh = scheme == SSH_SCHEME;
        Self {
            scheme,
            authority,
            delimiter: if ssh { ':' } else { '/' },
            extension: if ssh { ".git" } else { "" },
        }
    }

    /// `{scheme}://`
    pub fn scheme_prefix(&self) -> String {
        format!("{}://", self.scheme)
    }

    /// `//{authority}{delimiter}`
    pub fn authority_marker(&self) -> String {
        format!("//{}{}", self.authority, self.delimiter)
    }

    /// Full URL for an `owner/name` path.
    pub fn expected_url(&self, repo_path: &str) -> String {
        format!(
            "{}://{}{}{}{}",
            self.scheme, self.authority, self.delimiter, repo_path, self.extension
        )
    }
}

/// Rows whose URL does not start with the expected scheme.
pub fn scheme_failures(df: &DataFrame, column: UrlColumn) -> Result<Vec<usize>> {
    let prefix = UrlTemplate::for_column(column).scheme_prefix();
    let cells = string_cells(df, column.as_str())?;
    Ok(failing_rows(&cells, |_, url| url.starts_with(&prefix)))
}

/// Rows whose URL does not contain the expected authority.
pub fn authority_failures(df: &DataFrame, column: UrlColumn) -> Result<Vec<usize>> {
    let marker = UrlTemplate::for_column(column).authority_marker();
    let cells = string_cells(df, column.as_str())?;
    Ok(failing_rows(&cells, |_, url| url.contains(&marker)))
}

/// Rows whose URL differs from the one built from the owner/name columns.
///
/// Rows with a null owner or name fail.
pub fn path_failures(df: &DataFrame, column: UrlColumn) -> Result<Vec<usize>> {
    let template = UrlTemplate::for_column(column);
    let cells = string_cells(df, column.as_str())?;
    let paths = repo_paths(df, column.owner_column(), column.name_column())?;
    Ok(failing_rows(&cells, |idx, url| {
        paths[idx]
            .as_deref()
            .is_some_and(|path| url == template.expected_url(path))
    }))
}
