//! The spreadsheet retrieval collaborator: a seam trait the pipeline
//! consumes, plus the blocking Google Sheets v4 client implementing it.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::error::Error;

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// Where retrieved rows come from. The pipeline only ever sees the matrix of
/// cell values; transport and credentials live behind this seam, and tests
/// inject a canned implementation.
pub trait SheetSource {
    fn retrieve(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>, Error>;
}

/// Response body of the Sheets v4 `values.get` endpoint. A range with no
/// data comes back without a `values` key at all.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Blocking Sheets API client authenticated with an API key (the sheet must
/// be readable by link).
pub struct SheetsClient {
    http: Client,
    api_key: String,
}

impl SheetsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
        }
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(API_BASE)?.join(&format!("{spreadsheet_id}/values/{range}"))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

impl SheetSource for SheetsClient {
    fn retrieve(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>, Error> {
        let url = self
            .values_url(spreadsheet_id, range)
            .map_err(|e| Error::retrieval(spreadsheet_id, e))?;

        info!(spreadsheet_id, range, "retrieving values from Sheets API");
        let body: ValueRange = self
            .http
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json())
            .map_err(|e| Error::retrieval(spreadsheet_id, e))?;

        info!(rows = body.values.len(), "retrieved value range");
        Ok(body.values)
    }
}
