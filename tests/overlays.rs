use marks::app::{
  PickerKind,
  PromptKind,
  PromptState,
  PickerState,
};

#[test]
fn prompt_edits_at_the_cursor()
{
  let mut p = PromptState::new("Title", "ab", PromptKind::Search);
  assert_eq!(p.cursor, 2, "cursor starts after the initial text");
  p.move_left();
  p.insert('X');
  assert_eq!(p.text(), "aXb");
  assert_eq!(p.cursor, 2);
  assert!(p.backspace());
  assert_eq!(p.text(), "ab");
  p.move_left();
  p.move_left();
  p.move_left();
  assert_eq!(p.cursor, 0);
  assert!(!p.backspace(), "backspace at the start is a no-op");
  p.move_right();
  p.move_right();
  p.move_right();
  assert_eq!(p.cursor, 2, "cursor clamps to the buffer length");
}

#[test]
fn prompt_commit_trims()
{
  let p = PromptState::new("Title", "  padded  ", PromptKind::Search);
  assert_eq!(p.committed(), "padded");
  assert_eq!(p.text(), "  padded  ");
}

#[test]
fn prompt_window_follows_the_cursor()
{
  let mut p = PromptState::new("URL", "0123456789", PromptKind::Search);
  p.scroll_into_view(4);
  assert!(p.cursor >= p.view_offset && p.cursor <= p.view_offset + 4);

  // Jump the cursor back to the start; the window must come along
  for _ in 0..10
  {
    p.move_left();
  }
  p.scroll_into_view(4);
  assert_eq!(p.view_offset, 0);

  // And forward again
  for _ in 0..10
  {
    p.move_right();
  }
  p.scroll_into_view(4);
  assert_eq!(p.view_offset, 6);
}

#[test]
fn prompt_window_never_overshoots_a_short_buffer()
{
  let mut p = PromptState::new("Title", "ab", PromptKind::Search);
  p.view_offset = 9;
  p.scroll_into_view(40);
  assert_eq!(p.view_offset, 0);
}

#[test]
fn picker_movement_wraps_both_ways()
{
  let options = vec!["A".to_string(), "B".to_string(), "C".to_string()];
  let mut p = PickerState::new(options, 0, PickerKind::Filter);
  p.move_up();
  assert_eq!(p.current(), "C");
  p.move_down();
  p.move_down();
  p.move_down();
  p.move_down();
  assert_eq!(p.current(), "A");
}

#[test]
fn picker_cancel_returns_the_initial_option()
{
  let options = vec!["A".to_string(), "B".to_string(), "C".to_string()];
  let mut p = PickerState::new(options, 1, PickerKind::Filter);
  p.move_down();
  p.move_down();
  assert_eq!(p.current(), "A");
  assert_eq!(p.cancelled(), "B", "cancel means the selection never moved");
}

#[test]
fn picker_tolerates_out_of_range_initial()
{
  let options = vec!["A".to_string(), "B".to_string()];
  let p = PickerState::new(options, 7, PickerKind::Filter);
  assert_eq!(p.current(), "B");

  let empty = PickerState::new(Vec::new(), 3, PickerKind::Filter);
  assert_eq!(empty.current(), "");
  assert_eq!(empty.cancelled(), "");
}
