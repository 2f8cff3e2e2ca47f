//! Folder and search filtering over the collection.
//!
//! The pipeline is pure: given the same records, filter, and query it always
//! yields the same ordered subset, paired with each record's absolute index
//! so mutations can address the full collection afterwards.

use crate::core::record::Record;

/// Tokenize a search query: strip leading `/` characters, then split on
/// whitespace. An empty result means the search stage is a no-op.
pub fn search_tokens(query: &str) -> Vec<String>
{
  let cleaned = query.trim().trim_start_matches('/');
  cleaned.split_whitespace().map(|t| t.to_lowercase()).collect()
}

/// Apply the folder stage then the token stage, preserving collection order.
///
/// A record survives the folder stage when `folder_filter` is empty or equals
/// its folder case-insensitively, and the token stage when every token is a
/// substring of its four fields joined by single spaces, lower-cased.
pub fn visible_items<'a>(
  records: &'a [Record],
  folder_filter: &str,
  query: &str,
) -> Vec<(usize, &'a Record)>
{
  let tokens = search_tokens(query);
  records
    .iter()
    .enumerate()
    .filter(|(_, r)| {
      folder_filter.is_empty()
        || r.folder.to_lowercase() == folder_filter.to_lowercase()
    })
    .filter(|(_, r)| {
      if tokens.is_empty()
      {
        return true;
      }
      let haystack =
        format!("{} {} {} {}", r.title, r.url, r.folder, r.note)
          .to_lowercase();
      tokens.iter().all(|t| haystack.contains(t.as_str()))
    })
    .collect()
}
