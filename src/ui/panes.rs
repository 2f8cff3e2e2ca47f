//! The two body panes: the bookmark list and the field detail view.

use ratatui::{
  layout::Rect,
  style::Style,
  text::Line,
  widgets::{
    Block,
    Borders,
    Paragraph,
  },
};

use crate::{
  app::App,
  core::nav::Focus,
};

pub fn draw_list(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let accent = super::colors::accent_style(&app.settings);
  let mut block = Block::default().borders(Borders::ALL);
  if app.nav.focus == Focus::List
  {
    block = block.border_style(accent);
  }
  let inner = block.inner(area);
  f.render_widget(block, area);

  let items = app.visible();
  let height = inner.height as usize;
  let offset = app.nav.offset;
  let mut lines: Vec<Line> = Vec::new();
  for (row, (absolute_idx, record)) in
    items.iter().skip(offset).take(height).enumerate()
  {
    let text = format!(
      "{:>3} [{}] {}",
      absolute_idx + 1,
      record.folder,
      record.title
    );
    let text = super::truncate_to_width(&text, inner.width as usize);
    let style = if offset + row == app.nav.selected
    {
      accent
    }
    else
    {
      Style::default()
    };
    lines.push(Line::from(text).style(style));
  }
  f.render_widget(Paragraph::new(lines), inner);
}

pub fn draw_detail(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let accent = super::colors::accent_style(&app.settings);
  let focused = app.nav.focus == Focus::Detail;
  let mut block = Block::default().borders(Borders::ALL);
  if focused
  {
    block = block.border_style(accent);
  }
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();
  for (i, text) in
    app.detail_lines().into_iter().take(inner.height as usize).enumerate()
  {
    let text = super::truncate_to_width(&text, inner.width as usize);
    let style = if focused && i == app.nav.detail_cursor
    {
      accent
    }
    else
    {
      Style::default()
    };
    lines.push(Line::from(text).style(style));
  }
  f.render_widget(Paragraph::new(lines), inner);
}
