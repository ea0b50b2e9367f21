use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing::error;

use vehicle_sheet_sync::{
  logging,
  settings::{Settings, DEFAULT_SHEET, DEFAULT_SPREADSHEET_ID},
  sync
};

#[derive(Parser)]
#[command(name = "vehicle-sheet-sync")]
#[command(about = "Write vehicle makes and models from YAML into a Google Sheet", version)]
struct Cli {
  /// Vehicle data file
  #[arg(long, default_value = "vehicles.yaml")]
  data: PathBuf,

  /// OAuth client secret file
  #[arg(long, default_value = "credentials.json")]
  credentials: PathBuf,

  /// Where the OAuth token is cached between runs
  #[arg(long, default_value = "token.json")]
  token_cache: PathBuf,

  /// Id of the spreadsheet to write into
  #[arg(long, default_value = DEFAULT_SPREADSHEET_ID)]
  spreadsheet: String,

  /// Sheet (tab) inside the spreadsheet
  #[arg(long, default_value = DEFAULT_SHEET)]
  sheet: String,

  /// Pause after every this many writes (0 disables pausing)
  #[arg(long, default_value_t = 10)]
  pace_every: usize,

  /// How long each pause lasts
  #[arg(long, default_value_t = 2000)]
  pace_millis: u64,

  /// Print the rows instead of writing them
  #[arg(long)]
  dry_run: bool
}

impl From<Cli> for Settings {
  fn from(cli: Cli) -> Settings {
    Settings {
      data_path: cli.data,
      credentials_path: cli.credentials,
      token_cache_path: cli.token_cache,
      spreadsheet_id: cli.spreadsheet,
      sheet: cli.sheet,
      dry_run: cli.dry_run,
      ..Settings::default()
    }
    .with_pacing(cli.pace_every, cli.pace_millis)
  }
}

// everything happens in sequence, one thread is plenty
#[tokio::main(flavor = "current_thread")]
async fn main() {
  logging::init();
  let settings = Settings::from(Cli::parse());

  if let Err(e) = sync::run(&settings).await.context("vehicle sync failed") {
    error!("{:#}", e);
    std::process::exit(1);
  }
}
