//! Turns the retrieved matrix of cell values into [`PersonRecord`]s: the
//! first row is captured as the header row, every following row becomes one
//! record in original order.

use tracing::info;

use crate::error::Error;
use crate::person::{
    self, PersonRecord, FIRST_NAME_KEY, GIVEN_FIRST_NAME_KEY, LAST_NAME_KEY,
};

/// Build one record from a data row. The cell at `image_index` becomes the
/// image link; every other cell is ASCII-normalized and keyed by its header.
/// `row` is the 1-based sheet row number, used in error messages.
///
/// Rows shorter than the header row are legal (trailing cells absent); rows
/// wider than it would index past the headers and abort the batch.
pub fn build_record(
    headers: &[String],
    data_row: &[String],
    image_index: usize,
    row: usize,
) -> Result<PersonRecord, Error> {
    if data_row.len() > headers.len() {
        return Err(Error::MalformedRow {
            row,
            cells: data_row.len(),
            headers: headers.len(),
        });
    }

    let mut fields: Vec<(String, String)> = Vec::with_capacity(headers.len());
    let mut image_link = String::new();
    for (i, cell) in data_row.iter().enumerate() {
        if i == image_index {
            image_link = cell.clone();
            continue;
        }
        let value = person::normalize_ascii(cell);
        match fields.iter_mut().find(|(label, _)| label == &headers[i]) {
            // Duplicate header: the later column's value wins, the first
            // column's position is kept.
            Some((_, existing)) => *existing = value,
            None => fields.push((headers[i].clone(), value)),
        }
    }

    let has_first = fields
        .iter()
        .any(|(label, _)| label == GIVEN_FIRST_NAME_KEY || label == FIRST_NAME_KEY);
    let has_last = fields.iter().any(|(label, _)| label == LAST_NAME_KEY);
    if !has_first || !has_last {
        return Err(Error::MissingName { row });
    }

    Ok(PersonRecord::new(fields, image_link))
}

/// Consume the first row of `rows` as the header row and build one record
/// per remaining row, preserving row order. Fails on an empty matrix and on
/// the first malformed row.
pub fn ingest(rows: &[Vec<String>], image_index: usize) -> Result<Vec<PersonRecord>, Error> {
    let headers = rows.first().ok_or(Error::EmptyRange)?;
    info!(
        headers = headers.len(),
        rows = rows.len() - 1,
        "parsing retrieved rows"
    );
    rows[1..]
        .iter()
        .enumerate()
        .map(|(i, row)| build_record(headers, row, image_index, i + 2))
        .collect()
}

/// Stable sort by the raw "Last Name" value, case-sensitive; ties keep the
/// original row order.
pub fn sort_by_last_name(records: &mut [PersonRecord]) {
    records.sort_by(|a, b| a.get(LAST_NAME_KEY).cmp(&b.get(LAST_NAME_KEY)));
}
