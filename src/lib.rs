//! Pushes a YAML catalog of vehicle makes and models into a Google Sheet,
//! one row per model, grouped under its make.

pub mod auth;
pub mod dispatch;
pub mod error;
pub mod layout;
pub mod logging;
pub mod settings;
pub mod sheets;
pub mod sync;
pub mod vehicles;

#[cfg(test)]
mod stand_in;

pub use error::{Result, SyncError};
pub use settings::Settings;
