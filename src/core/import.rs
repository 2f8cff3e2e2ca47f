//! Import from a browser-exported bookmarks HTML file.
//!
//! The Netscape export format is regular enough that a small tag scanner
//! covers it: `<H3>` opens a folder, `</DL>` closes one, and `<A HREF=..>`
//! carries a link. Browser container folders ("Bookmarks Toolbar" and
//! friends) are not treated as folders of their own.

use crate::core::record::Record;

const CONTAINER_FOLDERS: [&str; 6] = [
  "bookmarks toolbar",
  "bookmark toolbar",
  "bookmarks bar",
  "bookmarks menu",
  "other bookmarks",
  "other favourites",
];

const IMPORT_FOLDER: &str = "Import";

#[derive(PartialEq)]
enum Capture
{
  None,
  Folder,
  Link,
}

/// Parse an exported bookmarks file into records. Entries missing a title or
/// URL are skipped; folder nesting is flattened to the innermost name.
pub fn import_html(text: &str) -> Vec<Record>
{
  let mut out: Vec<Record> = Vec::new();
  let mut folder_stack: Vec<String> = Vec::new();
  let mut capture = Capture::None;
  let mut folder_buf = String::new();
  let mut title_buf = String::new();
  let mut href = String::new();

  let mut rest = text;
  while !rest.is_empty()
  {
    let Some(lt) = rest.find('<')
    else
    {
      break;
    };
    let chunk = &rest[..lt];
    if !chunk.is_empty()
    {
      match capture
      {
        Capture::Folder => folder_buf.push_str(&decode_entities(chunk)),
        Capture::Link => title_buf.push_str(&decode_entities(chunk)),
        Capture::None =>
        {}
      }
    }
    let Some(gt) = rest[lt..].find('>')
    else
    {
      break;
    };
    let tag = &rest[lt + 1..lt + gt];
    rest = &rest[lt + gt + 1..];

    let trimmed = tag.trim();
    if trimmed.starts_with('!') || trimmed.starts_with('?')
    {
      continue;
    }
    let closing = trimmed.starts_with('/');
    let name = trimmed
      .trim_start_matches('/')
      .split_whitespace()
      .next()
      .unwrap_or("")
      .to_ascii_lowercase();

    match (name.as_str(), closing)
    {
      ("h3", false) =>
      {
        capture = Capture::Folder;
        folder_buf.clear();
      }
      ("h3", true) =>
      {
        let folder = folder_buf.trim().to_string();
        capture = Capture::None;
        if !folder.is_empty()
          && !CONTAINER_FOLDERS.contains(&folder.to_lowercase().as_str())
        {
          folder_stack.push(folder);
        }
      }
      ("dl", true) =>
      {
        folder_stack.pop();
      }
      ("a", false) =>
      {
        href = attr_value(trimmed, "href").unwrap_or_default();
        title_buf.clear();
        capture = Capture::Link;
      }
      ("a", true) =>
      {
        capture = Capture::None;
        let folder = folder_stack
          .last()
          .map(String::as_str)
          .unwrap_or(IMPORT_FOLDER);
        if let Ok(record) = Record::new(&title_buf, &href, folder, "")
        {
          out.push(record);
        }
        title_buf.clear();
        href.clear();
      }
      _ =>
      {}
    }
  }
  out
}

/// Pull a single attribute value out of a tag body, tolerating quote style
/// and attribute-name casing.
fn attr_value(
  tag: &str,
  name: &str,
) -> Option<String>
{
  let lower = tag.to_ascii_lowercase();
  let mut search = 0usize;
  while let Some(pos) = lower[search..].find(name)
  {
    let at = search + pos;
    search = at + name.len();
    // Reject matches inside another attribute name
    let boundary_ok = at == 0
      || !lower.as_bytes()[at - 1].is_ascii_alphanumeric();
    if !boundary_ok
    {
      continue;
    }
    let after = tag[at + name.len()..].trim_start();
    let Some(value_part) = after.strip_prefix('=')
    else
    {
      continue;
    };
    let value_part = value_part.trim_start();
    let raw = if let Some(q) = value_part.strip_prefix('"')
    {
      q.split('"').next().unwrap_or("")
    }
    else if let Some(q) = value_part.strip_prefix('\'')
    {
      q.split('\'').next().unwrap_or("")
    }
    else
    {
      value_part.split_whitespace().next().unwrap_or("")
    };
    return Some(decode_entities(raw));
  }
  None
}

fn decode_entities(s: &str) -> String
{
  s.replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&quot;", "\"")
    .replace("&#39;", "'")
    .replace("&amp;", "&")
}
