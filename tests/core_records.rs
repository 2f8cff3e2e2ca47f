use marks::core::record::{
  self,
  Record,
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
fn new_requires_title_and_url()
{
  assert!(Record::new("", "https://a", "F", "").is_err());
  assert!(Record::new("A", "", "F", "").is_err());
  assert!(Record::new("  ", "  ", "F", "").is_err());
  assert!(Record::new("A", "https://a", "F", "").is_ok());
}

#[test]
fn new_trims_fields_and_defaults_folder()
{
  let r = rec("  Title  ", " https://a ", "   ", "  note ");
  assert_eq!(r.title, "Title");
  assert_eq!(r.url, "https://a");
  assert_eq!(r.folder, "General");
  assert_eq!(r.note, "note");
}

#[test]
fn normalized_drops_fully_blank_records()
{
  let blank = Record {
    title:  "  ".to_string(),
    url:    "".to_string(),
    folder: "F".to_string(),
    note:   "n".to_string(),
  };
  assert!(blank.normalized().is_none());

  let url_only = Record {
    title:  "".to_string(),
    url:    "https://a".to_string(),
    folder: "".to_string(),
    note:   "".to_string(),
  };
  let kept = url_only.normalized().unwrap();
  assert_eq!(kept.folder, "General");
}

#[test]
fn folders_are_sorted_unique_and_never_empty()
{
  let records = vec![
    rec("a", "u", "Work", ""),
    rec("b", "u", "Home", ""),
    rec("c", "u", "Work", ""),
  ];
  assert_eq!(record::folders(&records), vec!["Home", "Work"]);
  assert_eq!(record::folders(&[]), vec!["General"]);
}

#[test]
fn default_folder_prefers_last_then_filter()
{
  assert_eq!(record::default_folder("Work", "Home"), "Work");
  assert_eq!(record::default_folder("", "Home"), "Home");
  assert_eq!(record::default_folder("  ", ""), "General");
}

#[test]
fn picker_line_flattens_whitespace()
{
  let r = rec("Two\nlines", "https://a", "F\tx", "");
  let line = r.picker_line();
  assert_eq!(line, "[F x] Two lines - https://a");
  assert!(!line.contains('\n'));
}

#[test]
fn url_recovered_from_picker_line()
{
  let r = rec("A - B", "https://a/b - c", "F", "");
  let line = r.picker_line();
  // The split happens on the last separator, so dashed titles survive
  assert_eq!(record::url_from_picker_line(&line), "https://a/b - c");
  assert_eq!(record::url_from_picker_line("no separator"), "no separator");
}

#[test]
fn add_update_and_remove()
{
  let mut records = vec![rec("a", "u1", "F", "")];
  let idx = record::add_record(&mut records, "b", "u2", "", "n").unwrap();
  assert_eq!(idx, 1);
  assert_eq!(records[1].folder, "General");

  record::update_record(&mut records, 1, "b2", "u3", "G", "").unwrap();
  assert_eq!(records[1].title, "b2");
  assert_eq!(records[1].folder, "G");

  assert!(record::update_record(&mut records, 1, "", "u3", "G", "").is_err());
  assert_eq!(records[1].title, "b2", "failed update must not touch the record");

  let removed = record::remove_record(&mut records, 0).unwrap();
  assert_eq!(removed.title, "a");
  assert!(record::remove_record(&mut records, 5).is_none());
  assert_eq!(records.len(), 1);
}

#[test]
fn field_setters_enforce_required_fields()
{
  let mut records = vec![rec("a", "u", "F", "")];
  assert!(record::set_title(&mut records, 0, "  ").is_err());
  assert!(record::set_url(&mut records, 0, "").is_err());
  assert_eq!(records[0].title, "a");

  record::set_title(&mut records, 0, " new ").unwrap();
  assert_eq!(records[0].title, "new");
  record::set_folder(&mut records, 0, "  ");
  assert_eq!(records[0].folder, "General");
  record::set_note(&mut records, 0, " n ");
  assert_eq!(records[0].note, "n");
  // Clearing the note is allowed
  record::set_note(&mut records, 0, "");
  assert_eq!(records[0].note, "");
}
