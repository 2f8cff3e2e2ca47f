//! Non-interactive entry points: add, list, external pick, and HTML import.
//!
//! Each returns the process exit code so `main` stays a thin dispatcher.

use std::fs;

use crate::{
  core::{
    import,
    record,
  },
  launch,
  store,
};

/// `--add`: append one bookmark from flags and save.
pub fn run_add(
  name: Option<String>,
  url: Option<String>,
  folder: String,
  note: String,
) -> i32
{
  let (Some(name), Some(url)) = (name, url)
  else
  {
    eprintln!("marks: --add requires --name and --url");
    return 2;
  };
  let mut records = store::load();
  let index = match record::add_record(&mut records, &name, &url, &folder, &note)
  {
    Ok(i) => i,
    Err(e) =>
    {
      eprintln!("marks: {e}");
      return 2;
    }
  };
  let (title, folder) = match records.get(index)
  {
    Some(r) => (r.title.clone(), r.folder.clone()),
    None => (name, folder),
  };
  if let Err(e) = store::save(&records)
  {
    eprintln!("marks: {e}");
    return 1;
  }
  println!("Added '{title}' to folder '{folder}'.");
  0
}

/// `--list`: one line per bookmark on stdout.
pub fn run_list(include_note: bool) -> i32
{
  let records = store::load();
  for r in &records
  {
    if include_note && !r.note.is_empty()
    {
      println!("{} | {}", r.picker_line(), r.note);
    }
    else
    {
      println!("{}", r.picker_line());
    }
  }
  0
}

/// `--pick`: hand the collection to rofi and open whatever comes back.
/// Exit 0 on open, 1 when the menu was dismissed, 2 on launcher failure.
pub fn run_pick() -> i32
{
  let records = store::load();
  match launch::pick_external(&records)
  {
    Ok(Some(url)) =>
    {
      if let Err(e) = launch::open_url(&url)
      {
        eprintln!("marks: failed to open '{url}': {e}");
        return 2;
      }
      0
    }
    Ok(None) => 1,
    Err(e) =>
    {
      eprintln!("marks: {e}");
      2
    }
  }
}

/// `--import FILE`: parse a Netscape bookmarks export and append everything
/// it contains.
pub fn run_import(path: &str) -> i32
{
  let text = match fs::read_to_string(path)
  {
    Ok(t) => t,
    Err(e) =>
    {
      eprintln!("marks: cannot read '{path}': {e}");
      return 2;
    }
  };
  let imported = import::import_html(&text);
  let count = imported.len();
  let mut records = store::load();
  records.extend(imported);
  if let Err(e) = store::save(&records)
  {
    eprintln!("marks: {e}");
    return 1;
  }
  println!("Imported {count} bookmarks from {path}.");
  0
}
