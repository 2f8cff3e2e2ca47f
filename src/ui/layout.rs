//! Frame geometry: where the header, list, detail, and footer bands live for
//! a given terminal size. Pure arithmetic so tests can pin the numbers down
//! without a terminal.

use ratatui::layout::Rect;

/// Narrowest detail pane worth drawing; below this the list takes the full
/// body width.
pub const MIN_DETAIL_WIDTH: u16 = 6;
pub const HEADER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry
{
  pub header: Rect,
  pub list:   Rect,
  pub detail: Option<Rect>,
  pub footer: Rect,
}

impl Geometry
{
  /// Split a `width` x `height` frame into the four bands. Degenerate sizes
  /// collapse bands to zero height rather than panic.
  pub fn compute(
    width: u16,
    height: u16,
    shortcuts_visible: bool,
    has_status: bool,
  ) -> Self
  {
    let header_h = HEADER_HEIGHT.min(height);
    let mut footer_h = 1 + u16::from(has_status)
      + if shortcuts_visible { 2 } else { 0 };
    footer_h = footer_h.min(height.saturating_sub(header_h));
    let body_h = height.saturating_sub(header_h + footer_h);

    let header = Rect::new(0, 0, width, header_h);
    let footer = Rect::new(0, header_h + body_h, width, footer_h);

    // The list prefers 55% of the width but never less than 20 columns, and
    // never more than the frame itself allows.
    let list_w =
      ((u32::from(width) * 55 / 100) as u16).max(20).min(width.max(10));
    let detail_w = width.saturating_sub(list_w);
    let (list, detail) = if detail_w >= MIN_DETAIL_WIDTH
    {
      (
        Rect::new(0, header_h, list_w, body_h),
        Some(Rect::new(list_w, header_h, detail_w, body_h)),
      )
    }
    else
    {
      (Rect::new(0, header_h, width, body_h), None)
    };

    Self { header, list, detail, footer }
  }

  /// Rows of bookmark entries the list pane can show inside its border.
  pub fn list_height(&self) -> usize
  {
    (self.list.height.saturating_sub(2)).max(1) as usize
  }

  /// Rows available inside the detail pane border, zero when hidden.
  pub fn detail_height(&self) -> usize
  {
    match self.detail
    {
      Some(r) => r.height.saturating_sub(2) as usize,
      None => 0,
    }
  }
}
