use marks::core::{
  filter,
  record::Record,
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

fn sample() -> Vec<Record>
{
  vec![
    rec("Rust Book", "https://doc.rust-lang.org/book", "Dev", "learning"),
    rec("News", "https://example.com/news", "Read", ""),
    rec("Crates", "https://crates.io", "Dev", "registry"),
  ]
}

#[test]
fn tokens_strip_leading_slashes_and_lowercase()
{
  assert_eq!(filter::search_tokens("//Rust Book"), vec!["rust", "book"]);
  assert_eq!(filter::search_tokens("  "), Vec::<String>::new());
  assert_eq!(filter::search_tokens("/"), Vec::<String>::new());
}

#[test]
fn empty_filter_and_query_show_everything_in_order()
{
  let records = sample();
  let visible = filter::visible_items(&records, "", "");
  let indices: Vec<usize> = visible.iter().map(|(i, _)| *i).collect();
  assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn folder_filter_is_case_insensitive_equality()
{
  let records = sample();
  let visible = filter::visible_items(&records, "dev", "");
  assert_eq!(visible.len(), 2);
  // Equality, not substring: "De" matches nothing
  assert!(filter::visible_items(&records, "De", "").is_empty());
}

#[test]
fn all_tokens_must_match_across_any_fields()
{
  let records = sample();
  // One token from the title, one from the note
  let visible = filter::visible_items(&records, "", "rust learning");
  assert_eq!(visible.len(), 1);
  assert_eq!(visible[0].0, 0);
  // A token matching nothing empties the result
  assert!(filter::visible_items(&records, "", "rust zzz").is_empty());
}

#[test]
fn folder_and_search_stages_compose()
{
  let records = sample();
  let visible = filter::visible_items(&records, "Dev", "crates");
  assert_eq!(visible.len(), 1);
  assert_eq!(visible[0].1.title, "Crates");
}

#[test]
fn absolute_indices_survive_filtering()
{
  let records = sample();
  let visible = filter::visible_items(&records, "Dev", "");
  let indices: Vec<usize> = visible.iter().map(|(i, _)| *i).collect();
  assert_eq!(indices, vec![0, 2]);
}

#[test]
fn pipeline_is_idempotent()
{
  let records = sample();
  let first = filter::visible_items(&records, "Dev", "/rust");
  let second = filter::visible_items(&records, "Dev", "/rust");
  let a: Vec<usize> = first.iter().map(|(i, _)| *i).collect();
  let b: Vec<usize> = second.iter().map(|(i, _)| *i).collect();
  assert_eq!(a, b);
}
