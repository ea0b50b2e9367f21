use std::path::Path;
use reqwest::Url;
use serde::Deserialize;

use crate::error::{Result, SyncError};

/// Read and write access to spreadsheets. Changing this invalidates any cached token.
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// An OAuth client as downloaded from the Google Cloud console
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientSecret {
  pub client_id: String,
  pub client_secret: String,
  pub auth_uri: String,
  pub token_uri: String,

  #[serde(default)]
  pub redirect_uris: Vec<String>
}

// the console nests the client under the kind of application it was made for
#[derive(Deserialize)]
struct SecretFile {
  web: Option<ClientSecret>,
  installed: Option<ClientSecret>
}

impl ClientSecret {
  pub fn from_slice(bytes: &[u8]) -> Result<Self> {
    let file: SecretFile = serde_json::from_slice(bytes)
      .map_err(|e| SyncError::AuthConfig(e.to_string()))?;

    let secret = file.web
      .or(file.installed)
      .ok_or_else(|| SyncError::AuthConfig("no credentials found".into()))?;

    if secret.redirect_uris.is_empty() {
      return Err(SyncError::AuthConfig("missing redirect URL".into()))
    }

    Ok(secret)
  }

  pub async fn load(path: &Path) -> Result<Self> {
    let bytes = tokio::fs::read(path)
      .await
      .map_err(|source| SyncError::ConfigRead { path: path.to_path_buf(), source })?;

    Self::from_slice(&bytes)
  }

  pub fn redirect_uri(&self) -> &str {
    self.redirect_uris.first().map(String::as_str).unwrap_or_default()
  }

  /// Consent page asking for offline access, so we come back with a refresh token
  pub fn authorize_url(&self, state: &str) -> Result<Url> {
    Url::parse_with_params(
      &self.auth_uri,
      &[
        ("access_type", "offline"),
        ("client_id", self.client_id.as_str()),
        ("redirect_uri", self.redirect_uri()),
        ("response_type", "code"),
        ("scope", SPREADSHEETS_SCOPE),
        ("state", state)
      ]
    )
    .map_err(|e| SyncError::AuthConfig(format!("bad auth_uri {:?}: {}", self.auth_uri, e)))
  }
}
