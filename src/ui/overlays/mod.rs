pub mod confirm;
pub mod picker;
pub mod prompt;

use ratatui::layout::Rect;

use crate::app::{
  App,
  Overlay,
};

pub fn draw(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &mut App,
)
{
  match app.overlay
  {
    Overlay::Prompt(_) => prompt::draw_prompt_rows(f, area, app),
    Overlay::Picker(_) => picker::draw_picker_panel(f, area, app),
    Overlay::Confirm(_) => confirm::draw_confirm_rows(f, area, app),
    Overlay::None =>
    {}
  }
}
