use marks::{
  core::record::Record,
  store,
};

fn rec(
  title: &str,
  url: &str,
  folder: &str,
  note: &str,
) -> Record
{
  Record::new(title, url, folder, note).unwrap()
}

#[test]
fn save_and_load_round_trip()
{
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join("bookmarks.json");
  let records = vec![
    rec("A", "https://a", "Work", "note"),
    rec("B", "https://b", "", ""),
  ];
  store::save_to(&path, &records).unwrap();
  let loaded = store::load_from(&path);
  assert_eq!(loaded, records);
  // No temp file left behind
  assert!(!path.with_extension("tmp").exists());
}

#[test]
fn missing_file_loads_empty()
{
  let dir = tempfile::tempdir().unwrap();
  assert!(store::load_from(&dir.path().join("absent.json")).is_empty());
}

#[test]
fn corrupt_file_loads_empty()
{
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("bookmarks.json");
  std::fs::write(&path, "not json at all {{{").unwrap();
  assert!(store::load_from(&path).is_empty());
  std::fs::write(&path, "{\"an\": \"object, not an array\"}").unwrap();
  assert!(store::load_from(&path).is_empty());
}

#[test]
fn malformed_entries_are_skipped_individually()
{
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("bookmarks.json");
  std::fs::write(
    &path,
    r#"[
      {"title": "Good", "url": "https://a"},
      42,
      "a string",
      {"title": "  ", "url": ""},
      {"url": "https://url-only"}
    ]"#,
  )
  .unwrap();
  let loaded = store::load_from(&path);
  assert_eq!(loaded.len(), 2);
  assert_eq!(loaded[0].title, "Good");
  assert_eq!(loaded[0].folder, "General", "missing folder takes the default");
  assert_eq!(loaded[1].url, "https://url-only");
}

#[test]
fn loaded_fields_are_trimmed()
{
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("bookmarks.json");
  std::fs::write(
    &path,
    r#"[{"title": "  T  ", "url": " u ", "folder": "  ", "note": " n "}]"#,
  )
  .unwrap();
  let loaded = store::load_from(&path);
  assert_eq!(loaded[0].title, "T");
  assert_eq!(loaded[0].url, "u");
  assert_eq!(loaded[0].folder, "General");
  assert_eq!(loaded[0].note, "n");
}

#[test]
fn settings_round_trip_and_defaults()
{
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("settings.json");

  let defaults = store::load_settings_from(&path);
  assert_eq!(defaults.accent_color, 6);

  let settings = store::Settings { accent_color: 3 };
  store::save_settings_to(&path, &settings).unwrap();
  assert_eq!(store::load_settings_from(&path).accent_color, 3);

  std::fs::write(&path, "garbage").unwrap();
  assert_eq!(store::load_settings_from(&path).accent_color, 6);
}

#[test]
fn save_overwrites_wholesale()
{
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("bookmarks.json");
  store::save_to(&path, &[rec("A", "u", "F", ""), rec("B", "u", "F", "")])
    .unwrap();
  store::save_to(&path, &[rec("C", "u", "F", "")]).unwrap();
  let loaded = store::load_from(&path);
  assert_eq!(loaded.len(), 1);
  assert_eq!(loaded[0].title, "C");
}
