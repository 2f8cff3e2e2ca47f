//! Footer band: a separator, an optional transient status row, and the
//! two-row command hint grid (five cells per row).

use ratatui::{
  layout::Rect,
  style::Style,
  text::{
    Line,
    Span,
  },
  widgets::{
    Block,
    Borders,
    Paragraph,
  },
};

use crate::app::{
  App,
  Mode,
};

pub const MAIN_COMMANDS: [(&str, &str); 10] = [
  ("j/k", "Move"),
  ("g/G", "Top/Bottom"),
  ("/", "Search"),
  ("f", "Filter"),
  ("a", "Add"),
  ("e", "Edit"),
  ("m", "Move folder"),
  ("o", "Open in browser"),
  ("d", "Delete"),
  ("q", "Quit"),
];

pub const SETTINGS_COMMANDS: [(&str, &str); 2] = [("q", "Quit"), ("c", "Color")];

pub const PICKER_COMMANDS: [(&str, &str); 3] =
  [("q", "Quit"), ("SPC", "Select"), ("j/k", "Move")];

pub fn draw(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let block = Block::default().borders(Borders::TOP);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut y = inner.y;
  if let Some(ref status) = app.status
    && y < area.y + area.height
  {
    let text = super::truncate_to_width(&status.text, inner.width as usize);
    f.render_widget(
      Paragraph::new(Line::from(text)),
      Rect::new(inner.x, y, inner.width, 1),
    );
    y += 1;
  }

  let commands: &[(&str, &str)] = match app.mode
  {
    Mode::SettingsMenu => &SETTINGS_COMMANDS,
    _ if app.shortcuts_visible => &MAIN_COMMANDS,
    _ => return,
  };
  let rows_area =
    Rect::new(inner.x, y, inner.width, (area.y + area.height).saturating_sub(y));
  draw_hint_rows(f, rows_area, commands, app);
}

/// Lay `commands` out as rows of five `key description` cells.
pub fn draw_hint_rows(
  f: &mut ratatui::Frame,
  area: Rect,
  commands: &[(&str, &str)],
  app: &App,
)
{
  let accent = super::colors::accent_style(&app.settings);
  let cell_width = (area.width / 5).max(1) as usize;
  for (row_idx, row) in commands.chunks(5).take(area.height as usize).enumerate()
  {
    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in row
    {
      let mut cell = String::new();
      cell.push_str(key);
      if !desc.is_empty()
      {
        cell.push(' ');
        cell.push_str(desc);
      }
      let cell = super::truncate_to_width(&cell, cell_width.saturating_sub(1));
      let desc_part = cell.strip_prefix(key).unwrap_or("");
      spans.push(Span::styled(key.to_string(), accent));
      spans.push(Span::styled(desc_part.to_string(), Style::default()));
      let used = key.len() + desc_part.len();
      if used < cell_width
      {
        spans.push(Span::raw(" ".repeat(cell_width - used)));
      }
    }
    f.render_widget(
      Paragraph::new(Line::from(spans)),
      Rect::new(area.x, area.y + row_idx as u16, area.width, 1),
    );
  }
}
