use std::path::Path;
use chrono::Utc;
use reqwest::Client;
use tracing::info;

use crate::error::Result;
use super::{refresh_token, token_from_web, ClientSecret, Token};

/// An HTTP client plus the token to sign its requests with.
/// Handed to whatever needs to talk to Google on the user's behalf.
#[derive(Debug, Clone)]
pub struct AuthorizedClient {
  http: Client,
  secret: ClientSecret,
  token: Token
}

impl AuthorizedClient {
  pub fn new(http: Client, secret: ClientSecret, token: Token) -> Self {
    AuthorizedClient { http, secret, token }
  }

  /// Uses the cached token when there is one, otherwise runs the consent
  /// flow and caches what it yields.
  pub async fn connect(credentials: &Path, token_cache: &Path) -> Result<Self> {
    let secret = ClientSecret::load(credentials).await?;
    let http = Client::new();

    let token = match Token::load(token_cache).await {
      Some(token) => {
        info!(path = %token_cache.display(), "using cached token");
        token
      },
      None => {
        let token = token_from_web(&http, &secret).await?;
        println!("Saving credential file to: {}", token_cache.display());
        token.save(token_cache).await?;
        token
      }
    };

    Ok(AuthorizedClient::new(http, secret, token))
  }

  pub fn http(&self) -> &Client { &self.http }

  pub fn token(&self) -> &Token { &self.token }

  /// Current access token, refreshed first if it is about to lapse.
  /// Refreshed tokens live for this run only and are not written back.
  pub async fn bearer(&mut self) -> Result<&str> {
    if self.token.expires_soon(Utc::now()) {
      info!("access token expired, refreshing");
      self.token = refresh_token(&self.http, &self.secret, &self.token).await?;
    }

    Ok(&self.token.access_token)
  }
}
