//! Full-screen accent color picker reached through the settings menu.

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

use crate::{
  app::App,
  ui::colors::PALETTE,
};

pub fn draw_color_picker(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let accent = super::colors::accent_style(&app.settings);

  // Boxed header, same shape as the main view
  let header = Rect::new(0, 0, area.width, 3.min(area.height));
  let block = Block::default().borders(Borders::ALL);
  let header_inner = block.inner(header);
  f.render_widget(block, header);
  f.render_widget(
    Paragraph::new(Line::from("Accent Color").style(accent).centered()),
    header_inner,
  );

  let footer_rows = 3u16.min(area.height);
  let body = Rect::new(
    0,
    header.height,
    area.width,
    area
      .height
      .saturating_sub(header.height)
      .saturating_sub(footer_rows)
      .max(1),
  );
  let body_block = Block::default().borders(Borders::ALL);
  let body_inner = body_block.inner(body);
  f.render_widget(body_block, body);

  let bar_width = (area.width / 6).clamp(8, 24) as usize;
  // One palette row every two lines
  let max_rows = (body_inner.height as usize).div_ceil(2);
  for (idx, (code, name)) in PALETTE.iter().take(max_rows).enumerate()
  {
    let y = body_inner.y + (idx * 2) as u16;
    if y >= body_inner.y + body_inner.height
    {
      break;
    }
    let marker =
      if *code == app.settings.accent_color { "[X]" } else { "[ ]" };
    let row_style =
      if idx == app.color_cursor { accent } else { Style::default() };
    let bar_style = if (0..=255).contains(code)
    {
      Style::default().bg(ratatui::style::Color::Indexed(*code as u8))
    }
    else
    {
      Style::default()
    };
    let spans = vec![
      Span::styled(format!("{marker}  "), row_style),
      Span::styled(" ".repeat(bar_width), bar_style),
      Span::styled(format!("  {name}"), row_style),
    ];
    f.render_widget(
      Paragraph::new(Line::from(spans)),
      Rect::new(body_inner.x, y, body_inner.width, 1),
    );
  }

  let footer = Rect::new(0, area.height.saturating_sub(footer_rows), area.width, footer_rows);
  let footer_block = Block::default().borders(Borders::TOP);
  let footer_inner = footer_block.inner(footer);
  f.render_widget(footer_block, footer);
  let mut y = footer_inner.y;
  if let Some(ref status) = app.status
  {
    let text = super::truncate_to_width(&status.text, footer_inner.width as usize);
    f.render_widget(
      Paragraph::new(Line::from(text)),
      Rect::new(footer_inner.x, y, footer_inner.width, 1),
    );
    y += 1;
  }
  let rows_area = Rect::new(
    footer_inner.x,
    y,
    footer_inner.width,
    (footer.y + footer.height).saturating_sub(y),
  );
  super::footer::draw_hint_rows(f, rows_area, &super::footer::PICKER_COMMANDS, app);
}
