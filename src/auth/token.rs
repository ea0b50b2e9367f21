use std::path::Path;
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::{Result, SyncError};

/// Tokens are treated as expired this long before they actually are
const EXPIRY_DELTA_SECS: i64 = 10;

/// An OAuth token as kept in the token cache file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
  pub access_token: String,

  #[serde(default)]
  pub token_type: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub refresh_token: Option<String>,

  #[serde(default)]
  pub expiry: Option<DateTime<Utc>>
}

/// Body of a successful token endpoint response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
  pub access_token: String,

  #[serde(default)]
  pub token_type: String,

  pub refresh_token: Option<String>,
  pub expires_in: Option<i64>
}

impl TokenResponse {
  /// Refresh responses usually leave out the refresh token, in which case the one we had stays valid
  pub fn into_token(self, previous_refresh_token: Option<String>, now: DateTime<Utc>) -> Token {
    Token {
      access_token: self.access_token,
      token_type: self.token_type,
      refresh_token: self.refresh_token.or(previous_refresh_token),
      expiry: self.expires_in
        .filter(|&secs| secs > 0)
        .map(|secs| now + Duration::seconds(secs))
    }
  }
}

impl Token {
  /// Whether the token is (about to be) rejected. A missing expiry, or the
  /// zero time some writers put there, means it never expires.
  pub fn expires_soon(&self, now: DateTime<Utc>) -> bool {
    match self.expiry {
      Some(expiry) if expiry.year() > 1 => expiry - Duration::seconds(EXPIRY_DELTA_SECS) <= now,
      _ => false
    }
  }

  /// Reads the token cache. Anything unusable counts as no cache at all.
  pub async fn load(path: &Path) -> Option<Token> {
    let bytes = match tokio::fs::read(path).await {
      Ok(b) => b,
      Err(e) => {
        info!(path = %path.display(), error = %e, "no cached token");
        return None
      }
    };

    match serde_json::from_slice(&bytes) {
      Ok(token) => Some(token),
      Err(e) => {
        info!(path = %path.display(), error = %e, "ignoring unreadable token cache");
        None
      }
    }
  }

  /// Writes the token cache, readable by the owner only
  pub async fn save(&self, path: &Path) -> Result<()> {
    let cache_error = |source: std::io::Error| SyncError::TokenCache { path: path.to_path_buf(), source };

    let mut contents = serde_json::to_vec(self)
      .map_err(|e| cache_error(e.into()))?;
    contents.push(b'\n');

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await.map_err(cache_error)?;
    file.write_all(&contents).await.map_err(cache_error)?;
    file.flush().await.map_err(cache_error)?;

    Ok(())
  }
}
