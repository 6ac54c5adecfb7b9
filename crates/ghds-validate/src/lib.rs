//! Column validation for GitHub repository and client datasets.
//!
//! Each validator inspects one column family (URLs, dates, counts,
//! repository paths), reduces a per-row predicate with logical AND and
//! returns whether every row passed. Outcomes go to an injected
//! [`Reporter`]; nothing is printed directly.
//!
//! ```ignore
//! use ghds_validate::{ColumnValidator, UrlColumn};
//!
//! let mut validator = ColumnValidator::new();
//! let ok = validator.validate_urls(UrlColumn::SshUrl, &df)?;
//! ```

pub mod checks;
mod error;
mod plan;
mod report;
mod selector;
mod time;
mod validator;
mod value;

pub use error::{Result, ValidateError};
pub use plan::{InferOptions, PlanCheck, PlanError, PlanResult, ValidationPlan};
pub use report::{
    CheckKind, CheckOutcome, RecordingReporter, Reporter, TracingReporter,
    write_validation_report_json,
};
pub use selector::{
    DateColumn, HTTPS_AUTHORITY, HTTPS_SCHEME, NumericColumn, RepoColumn, SSH_AUTHORITY,
    SSH_SCHEME, UrlColumn, compute_url_parts,
};
pub use time::{Clock, FixedClock, SystemClock, parse_timestamp};
pub use validator::ColumnValidator;
pub use value::ExpectedValue;
