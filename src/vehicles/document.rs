use std::path::Path;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::error::{Result, SyncError};

/// The vehicle file exactly as written: makes and model groups are two
/// separate lists, joined later by `parent_id`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VehicleDocument {
  #[serde(rename = "make")]
  pub makes: Vec<MakeRecord>,

  #[serde(rename = "model")]
  pub model_groups: Vec<ModelGroup>
}

/// A make before its models are attached
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MakeRecord {
  #[serde(deserialize_with = "scalar_text")]
  pub id: String,

  #[serde(deserialize_with = "scalar_text")]
  pub name: String
}

/// Every model belonging to the make identified by `parent_id`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelGroup {
  #[serde(deserialize_with = "scalar_text")]
  pub parent_id: String,

  pub values: Vec<ModelRecord>
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelRecord {
  #[serde(deserialize_with = "scalar_text")]
  pub id: String,

  #[serde(deserialize_with = "scalar_text")]
  pub name: String
}

impl VehicleDocument {
  pub fn from_slice(bytes: &[u8]) -> Result<Self> {
    Ok(serde_yaml::from_slice(bytes)?)
  }

  pub async fn load(path: &Path) -> Result<Self> {
    let bytes = tokio::fs::read(path)
      .await
      .map_err(|source| SyncError::ConfigRead { path: path.to_path_buf(), source })?;

    let document = Self::from_slice(&bytes)?;
    info!(
      path = %path.display(),
      makes = document.makes.len(),
      model_groups = document.model_groups.len(),
      "loaded vehicle data"
    );

    Ok(document)
  }
}

// ids are frequently bare integers in hand-written files (`id: 42`), keep
// them as text. Floats are refused: going through f64 would turn `1.10` into
// `1.1` and join models to the wrong make.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Scalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Flag(bool)
  }

  Ok(match Scalar::deserialize(deserializer)? {
    Scalar::Text(s) => s,
    Scalar::Signed(n) => n.to_string(),
    Scalar::Unsigned(n) => n.to_string(),
    Scalar::Flag(b) => b.to_string()
  })
}
