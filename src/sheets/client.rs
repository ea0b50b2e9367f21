use futures::future::BoxFuture;
use reqwest::Url;
use tracing::debug;

use crate::{
  auth::AuthorizedClient,
  dispatch::RowSink,
  error::{Result, SyncError},
  layout::Row
};
use super::ValueRange;

pub const SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/";

/// Writes rows into one spreadsheet through the Sheets v4 REST API.
/// Values go in as typed (`RAW`), no formula or locale parsing.
#[derive(Debug)]
pub struct SheetsClient {
  auth: AuthorizedClient,
  spreadsheet_id: String,
  endpoint: String
}

impl SheetsClient {
  pub fn new(auth: AuthorizedClient, spreadsheet_id: impl Into<String>) -> Self {
    SheetsClient {
      auth,
      spreadsheet_id: spreadsheet_id.into(),
      endpoint: SHEETS_ENDPOINT.to_owned()
    }
  }

  /// Points the client somewhere other than Google, e.g. a local stand-in
  pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
    self.endpoint = endpoint.into();
    self
  }

  pub fn spreadsheet_id(&self) -> &str { &self.spreadsheet_id }

  /// `.../spreadsheets/{id}/values/{range}?valueInputOption=RAW`
  pub fn update_url(&self, range: &str) -> Result<Url> {
    let write_error = |reason: String| SyncError::SinkWrite { range: range.to_owned(), reason };

    let mut url = Url::parse(&self.endpoint)
      .map_err(|e| write_error(format!("bad endpoint {:?}: {}", self.endpoint, e)))?;

    url
      .path_segments_mut()
      .map_err(|_| write_error(format!("endpoint {:?} cannot take a path", self.endpoint)))?
      .pop_if_empty()
      .extend(["spreadsheets", self.spreadsheet_id.as_str(), "values", range]);

    url.query_pairs_mut().append_pair("valueInputOption", "RAW");
    Ok(url)
  }

  async fn put_row(&mut self, row: &Row) -> Result<()> {
    let body = ValueRange::from(row);
    let write_error = |reason: String| SyncError::SinkWrite { range: body.range.clone(), reason };

    let url = self.update_url(&body.range)?;
    let bearer = self.auth.bearer().await?.to_owned();

    let response = self.auth
      .http()
      .put(url)
      .bearer_auth(bearer)
      .json(&body)
      .send()
      .await
      .map_err(|e| write_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let text = response.text().await.unwrap_or_default();
      return Err(write_error(format!("{}: {}", status, text.trim())))
    }

    debug!(range = %body.range, %status, "range updated");
    Ok(())
  }
}

impl RowSink for SheetsClient {
  fn update_range<'a>(&'a mut self, row: &'a Row) -> BoxFuture<'a, Result<()>> {
    Box::pin(self.put_row(row))
  }
}
