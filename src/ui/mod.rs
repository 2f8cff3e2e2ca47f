pub mod colors;
pub mod footer;
pub mod layout;
pub mod overlays;
pub mod panes;
pub mod settings;

use ratatui::{
  layout::Rect,
  text::Line,
  widgets::{
    Block,
    Borders,
    Paragraph,
  },
};
use unicode_width::UnicodeWidthChar;

use crate::app::{
  App,
  Mode,
};

/// Paint the whole frame for the current state. Stateless apart from
/// remembering the drawn area, which later key handling consults for layout
/// questions.
pub fn draw(
  f: &mut ratatui::Frame,
  app: &mut App,
)
{
  let area = f.area();
  app.last_area = area;
  app.clamp_nav();

  match app.mode
  {
    Mode::ColorPicker => settings::draw_color_picker(f, area, app),
    Mode::Main | Mode::SettingsMenu =>
    {
      let geo = app.geometry();
      draw_header(f, geo.header, app);
      panes::draw_list(f, geo.list, app);
      if let Some(detail) = geo.detail
      {
        panes::draw_detail(f, detail, app);
      }
      footer::draw(f, geo.footer, app);
    }
  }

  // Overlays paint last so they sit on top
  overlays::draw(f, area, app);
}

fn draw_header(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let mut parts = vec!["Bookmarks".to_string()];
  if !app.folder_filter.is_empty()
  {
    parts.push(format!("[{}]", app.folder_filter));
  }
  if !app.search_query.is_empty()
  {
    parts.push(format!("/{}", app.search_query));
  }
  let title = parts.join(" ");

  let block = Block::default().borders(Borders::ALL);
  let inner = block.inner(area);
  f.render_widget(block, area);
  let line = Line::from(truncate_to_width(&title, inner.width as usize))
    .style(colors::accent_style(&app.settings))
    .centered();
  f.render_widget(Paragraph::new(line), inner);
}

/// Cut a string to a display width without splitting wide characters.
pub(crate) fn truncate_to_width(
  s: &str,
  max_w: usize,
) -> String
{
  if max_w == 0
  {
    return String::new();
  }
  let mut out = String::new();
  let mut w = 0usize;
  for ch in s.chars()
  {
    let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
    if w + cw > max_w
    {
      break;
    }
    out.push(ch);
    w += cw;
  }
  out
}
