use std::{io, path::PathBuf};

/// Everything that can stop a sync run. None of these are recovered from,
/// the run ends at the first one.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
  #[error("unable to read {}: {source}", .path.display())]
  ConfigRead {
    path: PathBuf,
    source: io::Error
  },

  #[error("unable to parse vehicle data: {0}")]
  ConfigParse(#[from] serde_yaml::Error),

  #[error("unable to parse client secret file: {0}")]
  AuthConfig(String),

  #[error("unable to retrieve token: {0}")]
  AuthFlow(String),

  #[error("unable to cache oauth token at {}: {source}", .path.display())]
  TokenCache {
    path: PathBuf,
    source: io::Error
  },

  #[error("unable to read authorization code: {0}")]
  Prompt(io::Error),

  #[error("unable to set data for {range}: {reason}")]
  SinkWrite {
    range: String,
    reason: String
  }
}

pub type Result<T> = std::result::Result<T, SyncError>;
