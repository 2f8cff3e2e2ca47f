use marks::ui::layout::{
  Geometry,
  HEADER_HEIGHT,
  MIN_DETAIL_WIDTH,
};

#[test]
fn standard_terminal_splits_into_four_bands()
{
  let geo = Geometry::compute(80, 24, true, false);
  assert_eq!(geo.header.height, HEADER_HEIGHT);
  assert_eq!(geo.footer.height, 3, "separator plus two hint rows");
  assert_eq!(geo.list.y, 3);
  assert_eq!(geo.list.height, 24 - 3 - 3);
  // 55% of 80 = 44
  assert_eq!(geo.list.width, 44);
  let detail = geo.detail.unwrap();
  assert_eq!(detail.x, 44);
  assert_eq!(detail.width, 36);
  assert_eq!(geo.footer.y, 21);
}

#[test]
fn status_row_grows_the_footer()
{
  let without = Geometry::compute(80, 24, true, false);
  let with = Geometry::compute(80, 24, true, true);
  assert_eq!(with.footer.height, without.footer.height + 1);
  assert_eq!(with.list.height, without.list.height - 1);
}

#[test]
fn hidden_shortcuts_shrink_the_footer_to_the_separator()
{
  let geo = Geometry::compute(80, 24, false, false);
  assert_eq!(geo.footer.height, 1);
}

#[test]
fn narrow_terminal_drops_the_detail_pane()
{
  // list takes max(20, 55%) = 20, leaving 4 < MIN_DETAIL_WIDTH
  let geo = Geometry::compute(24, 24, true, false);
  assert!(geo.detail.is_none());
  assert_eq!(geo.list.width, 24, "list takes the full width");

  // One column wider than the threshold brings it back
  let wide_enough = 20 + MIN_DETAIL_WIDTH;
  let geo = Geometry::compute(wide_enough, 24, true, false);
  let detail = geo.detail.unwrap();
  assert_eq!(detail.width, MIN_DETAIL_WIDTH);
}

#[test]
fn degenerate_sizes_do_not_panic()
{
  for (w, h) in [(0, 0), (1, 1), (0, 24), (80, 0), (5, 2), (2, 5)]
  {
    let geo = Geometry::compute(w, h, true, true);
    assert!(geo.header.height <= h);
    assert!(geo.list_height() >= 1);
    let _ = geo.detail_height();
  }
}

#[test]
fn list_height_accounts_for_the_border()
{
  let geo = Geometry::compute(80, 24, true, false);
  assert_eq!(geo.list_height(), geo.list.height as usize - 2);
  let tiny = Geometry::compute(80, 4, true, false);
  assert_eq!(tiny.list_height(), 1, "never reports zero rows");
}

#[test]
fn huge_widths_do_not_overflow()
{
  let geo = Geometry::compute(u16::MAX, 50, true, false);
  let detail = geo.detail.unwrap();
  assert_eq!(geo.list.width as u32 + detail.width as u32, u32::from(u16::MAX));
}
