pub mod filter;
pub mod import;
pub mod nav;
pub mod record;

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the store and by record validation.
#[derive(Debug, Error)]
pub enum MarksError
{
  #[error("title and URL are required")]
  MissingRequiredField,
  #[error("{path}: {source}")]
  Io
  {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to encode JSON: {0}")]
  Encode(#[from] serde_json::Error),
}
