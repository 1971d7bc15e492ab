//! Validation of the three caller-supplied coordinates: spreadsheet URL,
//! A1-notation cell range, and the image column letter. Runs before any
//! retrieval and produces an immutable [`ValidatedInput`].

use crate::error::ValidationError;

pub const EXPECTED_URL_PREFIX: &str = "https://docs.google.com/spreadsheets/d/";

/// A URL copied while the sheet was open on a specific tab carries an
/// edit-mode fragment like `#gid=0`; those links are rejected outright.
pub const INVALID_EDIT_MARKER: &str = "#gid=";

/// Everything the URL keeps after this marker (the `/edit` view suffix) is
/// dropped when deriving the spreadsheet id.
const EDIT_SUFFIX: &str = "/edit";

/// Outcome of successful validation: the derived spreadsheet id, the
/// uppercased range, and the zero-based offset of the image column within
/// the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub spreadsheet_id: String,
    pub range: String,
    pub image_index: usize,
}

/// Check the caller's coordinates, in order; the first failing rule decides
/// the reported reason. `range` and `image_column` are uppercased before any
/// further checks.
pub fn validate(
    url: &str,
    range: &str,
    image_column: &str,
) -> Result<ValidatedInput, ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    if range.is_empty() {
        return Err(ValidationError::MissingRange);
    }
    if image_column.is_empty() {
        return Err(ValidationError::MissingImageColumn);
    }

    let range = range.to_uppercase();
    let image_column = image_column.to_uppercase();

    if !url.contains(EXPECTED_URL_PREFIX) {
        return Err(ValidationError::UrlPrefix {
            url: url.to_string(),
        });
    }
    if url.contains(INVALID_EDIT_MARKER) {
        return Err(ValidationError::UrlEditFragment {
            url: url.to_string(),
        });
    }

    if range_uses_single_char_coords(&range) {
        check_range_shape(&range)?;
        check_image_column(&range, &image_column)?;
    }

    let image_index = image_column_offset(&range, &image_column).ok_or_else(|| {
        ValidationError::ImageColumnOutsideRange {
            column: image_column.clone(),
            range: range.clone(),
        }
    })?;

    Ok(ValidatedInput {
        spreadsheet_id: spreadsheet_id_from_url(url),
        range,
        image_index,
    })
}

/// The range checks below compare single column letters and row digits by
/// position, so they only apply to five-character ranges like `A1:D3`. Any
/// range of six or more characters (multi-letter columns or multi-digit
/// rows, e.g. `C1:BB2`) skips them entirely.
fn range_uses_single_char_coords(range: &str) -> bool {
    range.len() < 6
}

/// A single-char-coordinate range must be `<col><row>:<col><row>` with the
/// start column letter strictly below the end column letter and the start
/// row digit strictly below the end row digit.
fn check_range_shape(range: &str) -> Result<(), ValidationError> {
    let b = range.as_bytes();
    let well_formed = b.len() == 5
        && b[0].is_ascii_uppercase()
        && b[1].is_ascii_digit()
        && b[2] == b':'
        && b[3].is_ascii_uppercase()
        && b[4].is_ascii_digit();
    if !well_formed || b[0] >= b[3] || b[1] >= b[4] {
        return Err(ValidationError::InvalidRange {
            range: range.to_string(),
        });
    }
    Ok(())
}

/// The image column letter must lie strictly between the range's start and
/// end column letters. Only called for single-char-coordinate ranges, after
/// the range shape itself has been checked.
fn check_image_column(range: &str, image_column: &str) -> Result<(), ValidationError> {
    let b = range.as_bytes();
    let col = image_column.as_bytes()[0];
    if !(b[0] < col && col < b[3]) {
        return Err(ValidationError::ImageColumnOutsideRange {
            column: image_column.to_string(),
            range: range.to_string(),
        });
    }
    Ok(())
}

/// Zero-based offset of the image column within the range, from the column
/// letters alone. `None` when the image column letter precedes the range's
/// start column, which the single-char checks rule out but a six-or-more
/// character range can still let through.
fn image_column_offset(range: &str, image_column: &str) -> Option<usize> {
    let start = range.as_bytes().first().copied()?;
    let col = image_column.as_bytes().first().copied()?;
    col.checked_sub(start).map(usize::from)
}

/// Derive the spreadsheet id the retrieval API wants: drop any `/edit…`
/// suffix, then the host prefix, then any remaining slashes.
pub fn spreadsheet_id_from_url(url: &str) -> String {
    let trimmed = match url.find(EDIT_SUFFIX) {
        Some(idx) => &url[..idx],
        None => url,
    };
    trimmed.replace(EXPECTED_URL_PREFIX, "").replace('/', "")
}
