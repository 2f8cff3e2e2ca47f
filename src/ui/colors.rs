//! Accent color palette: the classic indexed terminal colors offered by the
//! settings screen.

use ratatui::style::{
  Color,
  Modifier,
  Style,
};

use crate::store::Settings;

pub const PALETTE: [(i16, &str); 7] = [
  (1, "Red"),
  (2, "Green"),
  (3, "Yellow"),
  (4, "Blue"),
  (5, "Magenta"),
  (6, "Cyan"),
  (7, "White"),
];

/// Palette position of an accent code, or 0 when it is not offered.
pub fn palette_index(code: i16) -> usize
{
  PALETTE.iter().position(|(c, _)| *c == code).unwrap_or(0)
}

pub fn accent_color(settings: &Settings) -> Color
{
  let code = settings.accent_color;
  if (0..=255).contains(&code)
  {
    Color::Indexed(code as u8)
  }
  else
  {
    Color::Reset
  }
}

/// Bold accent, used for the selected row, shortcut keys, and the header.
pub fn accent_style(settings: &Settings) -> Style
{
  Style::default().fg(accent_color(settings)).add_modifier(Modifier::BOLD)
}
