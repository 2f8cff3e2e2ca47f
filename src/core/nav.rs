//! Selection, scroll, and pane-focus state for the main view.
//!
//! The visible set changes underneath this state every cycle (searching,
//! filtering, deleting), so every mutation path ends in [`NavState::clamp_to`]
//! and [`NavState::ensure_visible`] to keep the invariants
//! `selected < max(1, visible)` and `offset <= selected < offset + height`.

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus
{
  #[default]
  List,
  Detail,
}

/// Number of rendered detail lines, one per record field.
pub const DETAIL_ROWS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct NavState
{
  pub selected:      usize,
  pub offset:        usize,
  pub focus:         Focus,
  pub detail_cursor: usize,
}

impl NavState
{
  /// Clamping movement: the top edge stays at 0, it never wraps.
  pub fn move_up(&mut self)
  {
    self.selected = self.selected.saturating_sub(1);
  }

  /// Clamping movement: the bottom edge stays at `visible - 1`.
  pub fn move_down(
    &mut self,
    visible: usize,
  )
  {
    if self.selected + 1 < visible
    {
      self.selected += 1;
    }
  }

  pub fn jump_top(&mut self)
  {
    self.selected = 0;
  }

  pub fn jump_bottom(
    &mut self,
    visible: usize,
  )
  {
    self.selected = visible.saturating_sub(1);
  }

  /// Clamp the selection after the visible set shrank; never left dangling.
  pub fn clamp_to(
    &mut self,
    visible: usize,
  )
  {
    let max_idx = visible.saturating_sub(1);
    if self.selected > max_idx
    {
      self.selected = max_idx;
    }
    if self.offset > self.selected
    {
      self.offset = self.selected;
    }
  }

  /// Scroll the window so the selection is visible. Must run after every
  /// selection change and after every resize.
  pub fn ensure_visible(
    &mut self,
    list_height: usize,
  )
  {
    let h = list_height.max(1);
    if self.selected < self.offset
    {
      self.offset = self.selected;
    }
    else if self.selected >= self.offset + h
    {
      self.offset = self.selected + 1 - h;
    }
  }

  /// List -> Detail only when a non-empty detail pane is on screen;
  /// Detail -> List always succeeds.
  pub fn toggle_focus(
    &mut self,
    detail_rows: usize,
  )
  {
    match self.focus
    {
      Focus::List if detail_rows > 0 =>
      {
        self.focus = Focus::Detail;
        self.detail_cursor = self.detail_cursor.min(detail_rows - 1);
      }
      Focus::List =>
      {}
      Focus::Detail => self.focus = Focus::List,
    }
  }

  pub fn detail_up(&mut self)
  {
    self.detail_cursor = self.detail_cursor.saturating_sub(1);
  }

  pub fn detail_down(
    &mut self,
    detail_rows: usize,
  )
  {
    if self.detail_cursor + 1 < detail_rows.max(1)
    {
      self.detail_cursor += 1;
    }
  }

  /// Back to the top of the visible set; used when the filter or query
  /// changes wholesale.
  pub fn reset(&mut self)
  {
    self.selected = 0;
    self.offset = 0;
    self.detail_cursor = 0;
  }
}
