use std::io;
use chrono::Utc;
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::{Result, SyncError};
use super::{ClientSecret, Token, TokenResponse};

/// Echoed back by the consent page; we never check it since the code is pasted by hand
pub const AUTH_STATE: &str = "state-token";

/// Walks the user through the consent page and trades the code they paste back for a token
pub async fn token_from_web(http: &Client, secret: &ClientSecret) -> Result<Token> {
  let url = secret.authorize_url(AUTH_STATE)?;
  println!("Go to the following link in your browser then type the authorization code: \n{}", url);

  let code = read_code().await?;
  exchange_code(http, secret, &code).await
}

pub async fn exchange_code(http: &Client, secret: &ClientSecret, code: &str) -> Result<Token> {
  let response = request_token(http, secret, &[
    ("grant_type", "authorization_code"),
    ("code", code),
    ("redirect_uri", secret.redirect_uri()),
    ("client_id", secret.client_id.as_str()),
    ("client_secret", secret.client_secret.as_str())
  ]).await?;

  Ok(response.into_token(None, Utc::now()))
}

pub async fn refresh_token(http: &Client, secret: &ClientSecret, token: &Token) -> Result<Token> {
  let refresh = token.refresh_token
    .as_deref()
    .ok_or_else(|| SyncError::AuthFlow("token expired and refresh token is not set".into()))?;

  let response = request_token(http, secret, &[
    ("grant_type", "refresh_token"),
    ("refresh_token", refresh),
    ("client_id", secret.client_id.as_str()),
    ("client_secret", secret.client_secret.as_str())
  ]).await?;

  Ok(response.into_token(token.refresh_token.clone(), Utc::now()))
}

async fn request_token(http: &Client, secret: &ClientSecret, form: &[(&str, &str)]) -> Result<TokenResponse> {
  let response = http
    .post(&secret.token_uri)
    .form(form)
    .send()
    .await
    .map_err(|e| SyncError::AuthFlow(e.to_string()))?;

  let status = response.status();
  if !status.is_success() {
    let body = response.text().await.unwrap_or_default();
    return Err(SyncError::AuthFlow(format!("token endpoint answered {}: {}", status, body.trim())))
  }

  response
    .json::<TokenResponse>()
    .await
    .map_err(|e| SyncError::AuthFlow(format!("unreadable token response: {}", e)))
}

// the first word typed, like a scanf would take it
async fn read_code() -> Result<String> {
  let mut line = String::new();
  BufReader::new(tokio::io::stdin())
    .read_line(&mut line)
    .await
    .map_err(SyncError::Prompt)?;

  line
    .split_whitespace()
    .next()
    .map(str::to_owned)
    .ok_or_else(|| SyncError::Prompt(io::Error::new(io::ErrorKind::UnexpectedEof, "no authorization code entered")))
}
