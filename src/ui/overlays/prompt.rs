//! Line-editor overlay: a label row and an input row pinned to the bottom of
//! the screen, with `<`/`>` markers when the buffer scrolls horizontally.

use ratatui::{
  layout::Rect,
  text::Line,
  widgets::{
    Clear,
    Paragraph,
  },
};

use crate::app::{
  App,
  Overlay,
};

pub fn draw_prompt_rows(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &mut App,
)
{
  if area.height < 2 || area.width == 0
  {
    return;
  }
  let accent = crate::ui::colors::accent_style(&app.settings);
  let Overlay::Prompt(ref mut state) = app.overlay
  else
  {
    return;
  };

  let label_y = area.y + area.height - 2;
  let input_y = area.y + area.height - 1;
  // One column is reserved for each overflow marker
  let max_len = (area.width.saturating_sub(1)).max(3) as usize;
  let display_width = max_len - 2;
  state.scroll_into_view(display_width);

  let label_rect = Rect::new(area.x, label_y, area.width, 1);
  let input_rect = Rect::new(area.x, input_y, area.width, 1);
  f.render_widget(Clear, label_rect);
  f.render_widget(Clear, input_rect);

  let label = format!("{}:", state.label);
  f.render_widget(
    Paragraph::new(Line::from(crate::ui::truncate_to_width(
      &label,
      area.width.saturating_sub(1) as usize,
    ))
    .style(accent)),
    label_rect,
  );

  let window_end = (state.view_offset + display_width).min(state.buffer.len());
  let slice: String = state.buffer[state.view_offset..window_end].iter().collect();
  let left_marker = if state.view_offset > 0 { '<' } else { ' ' };
  let right_marker =
    if state.view_offset + display_width < state.buffer.len() { '>' } else { ' ' };
  let render =
    format!("{left_marker}{slice:<width$}{right_marker}", width = display_width);
  f.render_widget(
    Paragraph::new(Line::from(crate::ui::truncate_to_width(&render, max_len))),
    input_rect,
  );

  let cursor_col = 1 + (state.cursor - state.view_offset).min(display_width);
  let cursor_col = cursor_col.min(max_len - 1) as u16;
  f.set_cursor_position((area.x + cursor_col, input_y));
}
