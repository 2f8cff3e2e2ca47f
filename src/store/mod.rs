//! Persistence for the collection and the settings record.
//!
//! Loading is deliberately lenient: a missing or corrupt file yields an empty
//! collection (or default settings) rather than a fatal error, and malformed
//! entries are skipped one by one. Saving is a wholesale overwrite through a
//! sibling temp file renamed over the target, so a crash never leaves a
//! half-written collection behind.

pub mod paths;

use std::{
  fs,
  path::Path,
};

use serde::{
  Deserialize,
  Serialize,
};

use crate::core::{
  MarksError,
  record::Record,
};

/// Process-wide settings, persisted on every change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settings
{
  #[serde(default = "default_accent")]
  pub accent_color: i16,
}

fn default_accent() -> i16
{
  6 // cyan
}

impl Default for Settings
{
  fn default() -> Self
  {
    Self { accent_color: default_accent() }
  }
}

/// Load the collection from the data file. Any read or parse failure yields
/// an empty collection; entries that are not objects, or that end up with
/// both title and URL blank, are dropped silently.
pub fn load() -> Vec<Record>
{
  load_from(&paths::data_file())
}

pub fn load_from(path: &Path) -> Vec<Record>
{
  let Ok(text) = fs::read_to_string(path)
  else
  {
    return Vec::new();
  };
  let Ok(raw) = serde_json::from_str::<Vec<serde_json::Value>>(&text)
  else
  {
    return Vec::new();
  };
  raw
    .into_iter()
    .filter_map(|v| serde_json::from_value::<Record>(v).ok())
    .filter_map(Record::normalized)
    .collect()
}

/// Overwrite the data file with the whole collection.
pub fn save(records: &[Record]) -> Result<(), MarksError>
{
  save_to(&paths::data_file(), records)
}

pub fn save_to(
  path: &Path,
  records: &[Record],
) -> Result<(), MarksError>
{
  let json = serde_json::to_string_pretty(records)?;
  write_atomic(path, &json)
}

/// Load settings; missing or corrupt files yield the defaults.
pub fn load_settings() -> Settings
{
  load_settings_from(&paths::settings_file())
}

pub fn load_settings_from(path: &Path) -> Settings
{
  fs::read_to_string(path)
    .ok()
    .and_then(|text| serde_json::from_str(&text).ok())
    .unwrap_or_default()
}

pub fn save_settings(settings: &Settings) -> Result<(), MarksError>
{
  save_settings_to(&paths::settings_file(), settings)
}

pub fn save_settings_to(
  path: &Path,
  settings: &Settings,
) -> Result<(), MarksError>
{
  let json = serde_json::to_string_pretty(settings)?;
  write_atomic(path, &json)
}

fn write_atomic(
  path: &Path,
  contents: &str,
) -> Result<(), MarksError>
{
  let io_err = |source| MarksError::Io { path: path.to_path_buf(), source };
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent).map_err(io_err)?;
  }
  let tmp = path.with_extension("tmp");
  fs::write(&tmp, contents).map_err(io_err)?;
  fs::rename(&tmp, path).map_err(io_err)?;
  Ok(())
}
