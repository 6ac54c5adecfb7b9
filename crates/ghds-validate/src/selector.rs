//! Column selectors accepted by each validator family.
//!
//! Every validator restricts the columns it inspects to a fixed allow-list.
//! The lists are enums, so an unknown name is rejected when it is parsed,
//! before any dataset is touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidateError};

macro_rules! selector {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $column:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every accepted column, in allow-list order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human name of the selector family, used in error messages.
            pub const KIND: &'static str = $kind;

            /// Dataset column name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $column),+
                }
            }

            /// Comma separated allow-list.
            pub fn allowed() -> String {
                Self::ALL
                    .iter()
                    .copied()
                    .map(Self::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl FromStr for $name {
            type Err = ValidateError;

            fn from_str(value: &str) -> Result<Self> {
                match value {
                    $($column => Ok($name::$variant),)+
                    _ => Err(ValidateError::InvalidSelector {
                        kind: Self::KIND,
                        value: value.to_string(),
                        allowed: Self::allowed(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidateError;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(selector: $name) -> Self {
                selector.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

selector! {
    /// URL columns of repository and client records.
    UrlColumn, "URL column" {
        SshUrl => "sshUrl",
        Url => "url",
        CsshUrl => "csshUrl",
        Curl => "curl",
    }
}

selector! {
    /// Date columns.
    DateColumn, "date column" {
        CreatedAt => "createdAt",
        PushedAt => "pushedAt",
        PublishedAt => "publishedAt",
    }
}

selector! {
    /// Numeric columns that carry a lower bound.
    NumericColumn, "numeric column" {
        Stars => "stars",
        Packages => "packages",
        Clients => "clients",
        RelevantClients => "relevantClients",
        Cstars => "cstars",
        Files => "files",
        Number => "number",
    }
}

selector! {
    /// Repository path columns (`owner/name`).
    RepoColumn, "repository column" {
        BaseRepo => "baseRepo",
        HeadRepo => "headRepo",
    }
}

/// Scheme used by ssh clone URLs.
pub const SSH_SCHEME: &str = "ssh";
/// Authority of ssh clone URLs.
pub const SSH_AUTHORITY: &str = "git@github.com";
/// Scheme used by web URLs.
pub const HTTPS_SCHEME: &str = "https";
/// Authority of web URLs.
pub const HTTPS_AUTHORITY: &str = "github.com";

impl UrlColumn {
    /// `(scheme, authority)` of the URLs stored in this column.
    pub fn url_parts(self) -> (&'static str, &'static str) {
        match self {
            UrlColumn::SshUrl | UrlColumn::CsshUrl => (SSH_SCHEME, SSH_AUTHORITY),
            UrlColumn::Url | UrlColumn::Curl => (HTTPS_SCHEME, HTTPS_AUTHORITY),
        }
    }

    /// True for client columns, which pair with `cowner`/`cname`.
    pub fn is_client(self) -> bool {
        self.as_str().starts_with('c')
    }

    /// Column holding the repository owner for this URL column.
    pub fn owner_column(self) -> &'static str {
        if self.is_client() { "cowner" } else { "owner" }
    }

    /// Column holding the repository name for this URL column.
    pub fn name_column(self) -> &'static str {
        if self.is_client() { "cname" } else { "name" }
    }
}

/// Resolve the scheme and authority expected in a URL column.
///
/// Fails with [`ValidateError::InvalidSelector`] for anything other than
/// `sshUrl`, `csshUrl`, `url` or `curl`.
pub fn compute_url_parts(url_column: &str) -> Result<(&'static str, &'static str)> {
    let column: UrlColumn = url_column.parse()?;
    Ok(column.url_parts())
}
