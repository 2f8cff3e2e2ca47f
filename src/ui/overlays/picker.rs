//! Single-choice picker overlay: a boxed window above the footer listing the
//! folder (or filter) options.

use ratatui::{
  layout::Rect,
  style::Style,
  text::Line,
  widgets::{
    Block,
    Borders,
    Clear,
    Paragraph,
  },
};

use crate::app::{
  App,
  Overlay,
};

pub fn draw_picker_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let accent = crate::ui::colors::accent_style(&app.settings);
  let Overlay::Picker(ref state) = app.overlay
  else
  {
    return;
  };
  if area.width < 4 || area.height < 5
  {
    return;
  }

  let longest =
    state.options.iter().map(|o| o.chars().count()).max().unwrap_or(0) as u16;
  let width = (longest + 4).min(area.width.saturating_sub(2));
  let height =
    ((state.options.len() as u16) + 2).min(area.height.saturating_sub(2));
  let popup = Rect::new(
    area.x + 2,
    area.y + area.height.saturating_sub(height + 2),
    width,
    height,
  );
  f.render_widget(Clear, popup);

  let block = Block::default().borders(Borders::ALL);
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let mut lines: Vec<Line> = Vec::new();
  for (i, option) in state.options.iter().take(inner.height as usize).enumerate()
  {
    let style = if i == state.selected { accent } else { Style::default() };
    lines.push(
      Line::from(crate::ui::truncate_to_width(option, inner.width as usize))
        .style(style),
    );
  }
  f.render_widget(Paragraph::new(lines), inner);
}
