//! Yes/no confirmation rows pinned to the bottom of the screen.

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

pub fn draw_confirm_rows(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let Overlay::Confirm(ref state) = app.overlay
  else
  {
    return;
  };
  if area.height < 2 || area.width == 0
  {
    return;
  }

  let question_rect = Rect::new(area.x, area.y + area.height - 2, area.width, 1);
  let keys_rect = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
  f.render_widget(Clear, question_rect);
  f.render_widget(Clear, keys_rect);
  f.render_widget(
    Paragraph::new(Line::from(crate::ui::truncate_to_width(
      &state.question,
      area.width.saturating_sub(1) as usize,
    ))),
    question_rect,
  );
  f.render_widget(Paragraph::new(Line::from("[y/n]")), keys_rect);
}
