use std::{path::PathBuf, time::Duration};

use crate::dispatch::FixedWindow;

pub const DEFAULT_SPREADSHEET_ID: &str = "1OxUGr5qJ835LgPa45J93Iu1adKGNVdPTWgT7QMnKdww";
pub const DEFAULT_SHEET: &str = "Sheet2";

/// Everything a run needs to know up front
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
  /// YAML file with makes and models
  pub data_path: PathBuf,

  /// OAuth client secret as downloaded from the cloud console
  pub credentials_path: PathBuf,

  /// Where the user's token is kept between runs
  pub token_cache_path: PathBuf,

  pub spreadsheet_id: String,
  pub sheet: String,
  pub pacing: FixedWindow,

  /// Print the rows instead of writing them, skipping authorization entirely
  pub dry_run: bool
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      data_path: "vehicles.yaml".into(),
      credentials_path: "credentials.json".into(),
      token_cache_path: "token.json".into(),
      spreadsheet_id: DEFAULT_SPREADSHEET_ID.into(),
      sheet: DEFAULT_SHEET.into(),
      pacing: FixedWindow::default(),
      dry_run: false
    }
  }
}

impl Settings {
  pub fn with_pacing(mut self, every: usize, pause_millis: u64) -> Self {
    self.pacing = FixedWindow { every, pause: Duration::from_millis(pause_millis) };
    self
  }
}
