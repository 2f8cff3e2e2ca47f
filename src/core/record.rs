//! Bookmark records and the editing operations over the in-memory collection.
//!
//! The collection is a plain `Vec<Record>` in insertion order; that order is
//! what the UI shows as the absolute index and what edit/delete address after
//! filtering. All field writes go through the trimming rules here.

use serde::{
  Deserialize,
  Serialize,
};

use crate::core::MarksError;

pub const DEFAULT_FOLDER: &str = "General";

fn default_folder_field() -> String
{
  DEFAULT_FOLDER.to_string()
}

/// One bookmark entry. Fields are always stored trimmed; `folder` is never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record
{
  #[serde(default)]
  pub title:  String,
  #[serde(default)]
  pub url:    String,
  #[serde(default = "default_folder_field")]
  pub folder: String,
  #[serde(default)]
  pub note:   String,
}

impl Record
{
  /// Build a validated record. Title and URL are required after trimming;
  /// an empty folder falls back to [`DEFAULT_FOLDER`].
  pub fn new(
    title: &str,
    url: &str,
    folder: &str,
    note: &str,
  ) -> Result<Self, MarksError>
  {
    let title = title.trim();
    let url = url.trim();
    if title.is_empty() || url.is_empty()
    {
      return Err(MarksError::MissingRequiredField);
    }
    Ok(Self {
      title:  title.to_string(),
      url:    url.to_string(),
      folder: normalize_folder(folder),
      note:   note.trim().to_string(),
    })
  }

  /// Trim every field and apply the folder default. Returns `None` when both
  /// title and URL end up empty; such records are never retained.
  pub fn normalized(self) -> Option<Self>
  {
    let title = self.title.trim().to_string();
    let url = self.url.trim().to_string();
    if title.is_empty() && url.is_empty()
    {
      return None;
    }
    Some(Self {
      title,
      url,
      folder: normalize_folder(&self.folder),
      note: self.note.trim().to_string(),
    })
  }

  /// Single-line form handed to external pickers and `--list`.
  pub fn picker_line(&self) -> String
  {
    format!(
      "[{}] {} - {}",
      sanitize(&self.folder),
      sanitize(&self.title),
      sanitize(&self.url)
    )
  }
}

/// Trim a folder name, defaulting to [`DEFAULT_FOLDER`] when empty.
pub fn normalize_folder(folder: &str) -> String
{
  let f = folder.trim();
  if f.is_empty() { DEFAULT_FOLDER.to_string() } else { f.to_string() }
}

/// Collapse newlines and tabs to spaces and trim, for single-line output.
pub fn sanitize(value: &str) -> String
{
  value.replace(['\n', '\t'], " ").trim().to_string()
}

/// Sorted unique folder names across the collection; never empty.
pub fn folders(records: &[Record]) -> Vec<String>
{
  let mut set: std::collections::BTreeSet<String> =
    records.iter().map(|r| normalize_folder(&r.folder)).collect();
  if set.is_empty()
  {
    set.insert(DEFAULT_FOLDER.to_string());
  }
  set.into_iter().collect()
}

/// Default-folder policy for the Add flow: the first non-empty of
/// `last_folder`, then `folder_filter`, then [`DEFAULT_FOLDER`]. Evaluated
/// once per Add invocation.
pub fn default_folder(
  last_folder: &str,
  folder_filter: &str,
) -> String
{
  for candidate in [last_folder, folder_filter]
  {
    if !candidate.trim().is_empty()
    {
      return candidate.trim().to_string();
    }
  }
  DEFAULT_FOLDER.to_string()
}

/// Recover the URL from a picker line by splitting on the last `" - "`.
pub fn url_from_picker_line(choice: &str) -> &str
{
  match choice.rsplit_once(" - ")
  {
    Some((_, url)) => url.trim(),
    None => choice.trim(),
  }
}

/// Append a validated record; returns its absolute index.
pub fn add_record(
  records: &mut Vec<Record>,
  title: &str,
  url: &str,
  folder: &str,
  note: &str,
) -> Result<usize, MarksError>
{
  let record = Record::new(title, url, folder, note)?;
  records.push(record);
  Ok(records.len() - 1)
}

/// Overwrite the record at `index` wholesale (folder included).
pub fn update_record(
  records: &mut [Record],
  index: usize,
  title: &str,
  url: &str,
  folder: &str,
  note: &str,
) -> Result<(), MarksError>
{
  let record = Record::new(title, url, folder, note)?;
  if let Some(slot) = records.get_mut(index)
  {
    *slot = record;
  }
  Ok(())
}

pub fn set_folder(
  records: &mut [Record],
  index: usize,
  folder: &str,
)
{
  if let Some(r) = records.get_mut(index)
  {
    r.folder = normalize_folder(folder);
  }
}

pub fn set_title(
  records: &mut [Record],
  index: usize,
  title: &str,
) -> Result<(), MarksError>
{
  let title = title.trim();
  if title.is_empty()
  {
    return Err(MarksError::MissingRequiredField);
  }
  if let Some(r) = records.get_mut(index)
  {
    r.title = title.to_string();
  }
  Ok(())
}

pub fn set_url(
  records: &mut [Record],
  index: usize,
  url: &str,
) -> Result<(), MarksError>
{
  let url = url.trim();
  if url.is_empty()
  {
    return Err(MarksError::MissingRequiredField);
  }
  if let Some(r) = records.get_mut(index)
  {
    r.url = url.to_string();
  }
  Ok(())
}

pub fn set_note(
  records: &mut [Record],
  index: usize,
  note: &str,
)
{
  if let Some(r) = records.get_mut(index)
  {
    r.note = note.trim().to_string();
  }
}

/// Remove the record at `index`, returning it when present.
pub fn remove_record(
  records: &mut Vec<Record>,
  index: usize,
) -> Option<Record>
{
  if index < records.len() { Some(records.remove(index)) } else { None }
}
