use tracing::info;

use crate::{
  auth::AuthorizedClient,
  dispatch::{DispatchReport, Dispatcher, PrintSink, Unpaced},
  error::Result,
  layout::{lay_out, Row},
  settings::Settings,
  sheets::SheetsClient,
  vehicles::{assemble, VehicleDocument}
};

/// Loads the vehicle file and turns it into the rows to write
pub async fn plan(settings: &Settings) -> Result<Vec<Row>> {
  let document = VehicleDocument::load(&settings.data_path).await?;
  let makes = assemble(document);
  let rows = lay_out(&settings.sheet, &makes);

  info!(makes = makes.len(), rows = rows.len(), sheet = %settings.sheet, "rows laid out");
  Ok(rows)
}

/// One full run: read, lay out, authorize, write. Stops at the first error.
pub async fn run(settings: &Settings) -> Result<DispatchReport> {
  let rows = plan(settings).await?;

  if settings.dry_run {
    return Dispatcher::new(PrintSink, Unpaced).dispatch(&rows).await
  }

  let auth = AuthorizedClient::connect(&settings.credentials_path, &settings.token_cache_path).await?;
  let sheets = SheetsClient::new(auth, settings.spreadsheet_id.as_str());

  info!(spreadsheet = %sheets.spreadsheet_id(), rows = rows.len(), "writing rows");
  Dispatcher::new(sheets, settings.pacing).dispatch(&rows).await
}
