//! Input handling for keyboard events.
//!
//! Overlays own input until they resolve; next come the settings screens,
//! then the main-view keys. Returns `Ok(true)` when the caller should exit.

use std::io;

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};

use crate::app::{
  App,
  ConfirmKind,
  Mode,
  Overlay,
  PickerKind,
  PromptKind,
};
use crate::core::nav::Focus;
use crate::ui::colors::PALETTE;

/// Accept a terminal key event and mutate the [`App`] accordingly.
pub fn handle_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  // Ignore key release/repeat events to avoid double-processing
  if key.kind != KeyEventKind::Press
  {
    return Ok(false);
  }

  match app.overlay
  {
    Overlay::Prompt(_) =>
    {
      handle_prompt_key(app, key);
      return Ok(false);
    }
    Overlay::Picker(_) =>
    {
      handle_picker_key(app, key);
      return Ok(false);
    }
    Overlay::Confirm(_) =>
    {
      handle_confirm_key(app, key);
      return Ok(false);
    }
    Overlay::None =>
    {}
  }

  match app.mode
  {
    Mode::SettingsMenu =>
    {
      handle_settings_key(app, key);
      Ok(false)
    }
    Mode::ColorPicker =>
    {
      handle_color_picker_key(app, key);
      Ok(false)
    }
    Mode::Main => handle_main_key(app, key),
  }
}

fn handle_prompt_key(
  app: &mut App,
  key: KeyEvent,
)
{
  // Commit and cancel both resolve the prompt; everything else edits it in
  // place. Escape resolves with the empty string, which each flow treats as
  // a cancellation of the step.
  let resolved: Option<(PromptKind, String)> = match key.code
  {
    KeyCode::Enter =>
    {
      match std::mem::replace(&mut app.overlay, Overlay::None)
      {
        Overlay::Prompt(state) => Some((state.kind.clone(), state.committed())),
        other =>
        {
          app.overlay = other;
          None
        }
      }
    }
    KeyCode::Esc =>
    {
      match std::mem::replace(&mut app.overlay, Overlay::None)
      {
        Overlay::Prompt(state) => Some((state.kind.clone(), String::new())),
        other =>
        {
          app.overlay = other;
          None
        }
      }
    }
    _ =>
    {
      let mut live_preview: Option<String> = None;
      if let Overlay::Prompt(ref mut state) = app.overlay
      {
        let is_search = matches!(state.kind, PromptKind::Search);
        match key.code
        {
          KeyCode::Left => state.move_left(),
          KeyCode::Right => state.move_right(),
          KeyCode::Backspace =>
          {
            if state.backspace() && is_search
            {
              live_preview = Some(state.text());
            }
          }
          KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
              && !key.modifiers.contains(KeyModifiers::ALT) =>
          {
            state.insert(ch);
            if is_search
            {
              live_preview = Some(state.text());
            }
          }
          _ =>
          {}
        }
      }
      if let Some(text) = live_preview
      {
        app.preview_search(&text);
      }
      None
    }
  };
  if let Some((kind, text)) = resolved
  {
    app.resolve_prompt(kind, text);
  }
}

fn handle_picker_key(
  app: &mut App,
  key: KeyEvent,
)
{
  let resolved: Option<(PickerKind, String)> = match key.code
  {
    KeyCode::Enter =>
    {
      match std::mem::replace(&mut app.overlay, Overlay::None)
      {
        Overlay::Picker(state) =>
        {
          Some((state.kind.clone(), state.current().to_string()))
        }
        other =>
        {
          app.overlay = other;
          None
        }
      }
    }
    KeyCode::Esc | KeyCode::Char('q') =>
    {
      match std::mem::replace(&mut app.overlay, Overlay::None)
      {
        Overlay::Picker(state) =>
        {
          Some((state.kind.clone(), state.cancelled().to_string()))
        }
        other =>
        {
          app.overlay = other;
          None
        }
      }
    }
    _ =>
    {
      if let Overlay::Picker(ref mut state) = app.overlay
      {
        match key.code
        {
          KeyCode::Up | KeyCode::Char('k') => state.move_up(),
          KeyCode::Down | KeyCode::Char('j') => state.move_down(),
          _ =>
          {}
        }
      }
      None
    }
  };
  if let Some((kind, choice)) = resolved
  {
    app.resolve_picker(kind, choice);
  }
}

fn handle_confirm_key(
  app: &mut App,
  key: KeyEvent,
)
{
  // Two-state input only: no default-accept on arbitrary keys
  let yes = match key.code
  {
    KeyCode::Char('y' | 'Y') => true,
    KeyCode::Char('n' | 'N') => false,
    _ => return,
  };
  let kind: Option<ConfirmKind> =
    match std::mem::replace(&mut app.overlay, Overlay::None)
    {
      Overlay::Confirm(state) => Some(state.kind.clone()),
      other =>
      {
        app.overlay = other;
        None
      }
    };
  if let Some(kind) = kind
  {
    app.resolve_confirm(kind, yes);
  }
}

fn handle_settings_key(
  app: &mut App,
  key: KeyEvent,
)
{
  match key.code
  {
    KeyCode::Char('q' | 'Q') => app.leave_settings(),
    KeyCode::Char('c' | 'C') => app.mode = Mode::ColorPicker,
    _ =>
    {}
  }
}

fn handle_color_picker_key(
  app: &mut App,
  key: KeyEvent,
)
{
  let n = PALETTE.len();
  match key.code
  {
    KeyCode::Char('q' | 'Q') => app.leave_settings(),
    KeyCode::Up | KeyCode::Char('k') => app.color_cursor = (app.color_cursor + n - 1) % n,
    KeyCode::Down | KeyCode::Char('j') => app.color_cursor = (app.color_cursor + 1) % n,
    KeyCode::Enter | KeyCode::Char(' ') =>
    {
      let (code, _) = PALETTE[app.color_cursor.min(n - 1)];
      app.apply_accent(code);
    }
    _ =>
    {}
  }
}

fn handle_main_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  match key.code
  {
    KeyCode::Tab | KeyCode::BackTab =>
    {
      let rows = app.detail_rows_on_screen();
      app.nav.toggle_focus(rows);
    }
    KeyCode::Char('q' | 'Q') =>
    {
      app.should_quit = true;
      return Ok(true);
    }
    KeyCode::Char('s' | 'S') => app.enter_settings(),
    KeyCode::Up | KeyCode::Char('k') =>
    {
      if app.nav.focus == Focus::Detail
      {
        app.nav.detail_up();
      }
      else
      {
        app.nav.move_up();
        app.clamp_nav();
      }
    }
    KeyCode::Down | KeyCode::Char('j') =>
    {
      if app.nav.focus == Focus::Detail
      {
        app.nav.detail_down(app.detail_rows_on_screen());
      }
      else
      {
        app.nav.move_down(app.visible_len());
        app.clamp_nav();
      }
    }
    KeyCode::Char('g') | KeyCode::Home =>
    {
      app.nav.jump_top();
      app.clamp_nav();
    }
    KeyCode::Char('G') | KeyCode::End =>
    {
      app.nav.jump_bottom(app.visible_len());
      app.clamp_nav();
    }
    KeyCode::Char('o' | 'O') => app.open_selected(),
    KeyCode::Char('a' | 'A') => app.open_add_flow(),
    KeyCode::Char('e' | 'E') => app.open_edit_flow(),
    KeyCode::Char('m' | 'M') => app.open_move_picker(),
    KeyCode::Char('d' | 'D') => app.open_delete_confirm(),
    KeyCode::Char('/') => app.open_search_prompt(),
    KeyCode::Char('f' | 'F') => app.open_filter_picker(),
    _ =>
    {}
  }
  Ok(false)
}
