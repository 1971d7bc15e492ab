use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejection of one of the three caller-supplied coordinates. One variant per
/// rule; the first failing rule wins and each message carries the offending
/// value(s). Raised before any network or file I/O happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Must give a value for URL")]
    MissingUrl,

    #[error("Must give a value for Range")]
    MissingRange,

    #[error("Must give a value for Image Column")]
    MissingImageColumn,

    #[error("URL must contain {}, got `{url}`", crate::validate::EXPECTED_URL_PREFIX)]
    UrlPrefix { url: String },

    #[error("URL must not contain `{}` (copy the link without the edit fragment), got `{url}`", crate::validate::INVALID_EDIT_MARKER)]
    UrlEditFragment { url: String },

    #[error("Range is invalid: `{range}`")]
    InvalidRange { range: String },

    #[error("Image Column must be within given range: column `{column}`, range `{range}`")]
    ImageColumnOutsideRange { column: String, range: String },
}

/// Everything a run can fail with, surfaced to the invoking layer as
/// distinguishable classes. Nothing here is retried or swallowed.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to retrieve spreadsheet `{spreadsheet_id}`: {reason}")]
    Retrieval {
        spreadsheet_id: String,
        reason: String,
    },

    /// A data row wider than the header row would index past the captured
    /// headers. Aborts the whole batch.
    #[error("row {row} has {cells} cells but the header row has {headers}")]
    MalformedRow {
        row: usize,
        cells: usize,
        headers: usize,
    },

    /// A row without a `Last Name` value or either first-name variant cannot
    /// produce a display name or file name.
    #[error("row {row} is missing a `Last Name` or first-name column")]
    MissingName { row: usize },

    #[error("spreadsheet range returned no rows")]
    EmptyRange,

    /// Directory creation or file write failure. Files written before the
    /// failure are left on disk.
    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn retrieval(spreadsheet_id: &str, reason: impl ToString) -> Self {
        Error::Retrieval {
            spreadsheet_id: spreadsheet_id.to_string(),
            reason: reason.to_string(),
        }
    }
}
