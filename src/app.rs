//! Session state for the interactive TUI, used both by the binary and by
//! integration tests.
//!
//! [`App`] owns the collection plus the per-cycle view and navigation state.
//! Modal sub-flows (line editor, picker, confirmation) are modelled as an
//! explicit [`Overlay`] tagged union dispatched from the single event loop:
//! while an overlay is active it owns keyboard input, and resolving it feeds
//! the captured value back into the flow it belongs to. Escape unwinds the
//! current overlay only; side effects already committed (a folder name picked
//! via `<Add new>`) are intentionally not rolled back.

use std::time::{
  Duration,
  Instant,
};

use ratatui::layout::Rect;

use crate::{
  core::{
    filter,
    nav::{
      DETAIL_ROWS,
      Focus,
      NavState,
    },
    record::{
      self,
      Record,
    },
  },
  store::{
    self,
    Settings,
  },
  ui::layout::Geometry,
};

const STATUS_TTL: Duration = Duration::from_secs(4);

/// Sentinel option that chains the folder picker into a folder-name prompt.
pub const ADD_NEW_OPTION: &str = "<Add new>";
/// Sentinel option that clears the folder filter.
pub const ALL_OPTION: &str = "<All>";

/// Mutually exclusive top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode
{
  Main,
  SettingsMenu,
  ColorPicker,
}

/// What a folder choice feeds once the picker (or the chained name prompt)
/// resolves.
#[derive(Debug, Clone)]
pub enum FolderTarget
{
  Add,
  Move { index: usize },
  EditFolder { index: usize },
}

#[derive(Debug, Clone)]
pub enum PromptKind
{
  Search,
  NewFolder
  {
    target:   FolderTarget,
    fallback: String,
  },
  AddTitle
  {
    folder: String,
  },
  AddUrl
  {
    folder: String,
    title:  String,
  },
  AddNote
  {
    folder: String,
    title:  String,
    url:    String,
  },
  EditAllTitle
  {
    index: usize,
  },
  EditAllUrl
  {
    index: usize,
    title: String,
  },
  EditAllNote
  {
    index: usize,
    title: String,
    url:   String,
  },
  EditTitle
  {
    index: usize,
  },
  EditUrl
  {
    index: usize,
  },
  EditNote
  {
    index: usize,
  },
}

/// Line-editor state: a character buffer with a cursor and a horizontal
/// window kept in sync with the display width at draw time.
#[derive(Debug, Clone)]
pub struct PromptState
{
  pub label:       String,
  pub buffer:      Vec<char>,
  pub cursor:      usize,
  pub view_offset: usize,
  pub kind:        PromptKind,
}

impl PromptState
{
  pub fn new(
    label: &str,
    initial: &str,
    kind: PromptKind,
  ) -> Self
  {
    let buffer: Vec<char> = initial.chars().collect();
    let cursor = buffer.len();
    Self { label: label.to_string(), buffer, cursor, view_offset: 0, kind }
  }

  pub fn insert(
    &mut self,
    ch: char,
  )
  {
    self.buffer.insert(self.cursor, ch);
    self.cursor += 1;
  }

  /// Delete before the cursor; returns whether the content changed.
  pub fn backspace(&mut self) -> bool
  {
    if self.cursor == 0
    {
      return false;
    }
    self.buffer.remove(self.cursor - 1);
    self.cursor -= 1;
    true
  }

  pub fn move_left(&mut self)
  {
    self.cursor = self.cursor.saturating_sub(1);
  }

  pub fn move_right(&mut self)
  {
    self.cursor = (self.cursor + 1).min(self.buffer.len());
  }

  pub fn text(&self) -> String
  {
    self.buffer.iter().collect()
  }

  /// The value a commit resolves with.
  pub fn committed(&self) -> String
  {
    self.text().trim().to_string()
  }

  /// Recompute the horizontal window so the cursor stays inside it.
  pub fn scroll_into_view(
    &mut self,
    display_width: usize,
  )
  {
    let w = display_width.max(1);
    if self.cursor < self.view_offset
    {
      self.view_offset = self.cursor;
    }
    else if self.cursor > self.view_offset + w
    {
      self.view_offset = self.cursor - w;
    }
    let max_offset = self.buffer.len().saturating_sub(w);
    self.view_offset = self.view_offset.min(max_offset);
  }
}

#[derive(Debug, Clone)]
pub enum PickerKind
{
  Filter,
  Folder
  {
    target:  FolderTarget,
    default: String,
  },
}

/// Single-choice picker over a non-empty option list. Movement wraps; cancel
/// resolves to the option at `initial`, making it a no-op rather than a
/// failure.
#[derive(Debug, Clone)]
pub struct PickerState
{
  pub options:  Vec<String>,
  pub selected: usize,
  pub initial:  usize,
  pub kind:     PickerKind,
}

impl PickerState
{
  pub fn new(
    options: Vec<String>,
    initial: usize,
    kind: PickerKind,
  ) -> Self
  {
    let initial = if options.is_empty() { 0 } else { initial % options.len() };
    Self { options, selected: initial, initial, kind }
  }

  pub fn move_up(&mut self)
  {
    let n = self.options.len();
    if n > 0
    {
      self.selected = (self.selected + n - 1) % n;
    }
  }

  pub fn move_down(&mut self)
  {
    let n = self.options.len();
    if n > 0
    {
      self.selected = (self.selected + 1) % n;
    }
  }

  pub fn current(&self) -> &str
  {
    self.options.get(self.selected).map(String::as_str).unwrap_or("")
  }

  /// Cancellation value: the option highlighted when the picker opened.
  pub fn cancelled(&self) -> &str
  {
    self.options.get(self.initial).map(String::as_str).unwrap_or("")
  }
}

#[derive(Debug, Clone)]
pub enum ConfirmKind
{
  DeleteRecord { index: usize },
}

#[derive(Debug, Clone)]
pub struct ConfirmState
{
  pub question: String,
  pub kind:     ConfirmKind,
}

#[derive(Debug, Clone)]
pub enum Overlay
{
  None,
  Prompt(Box<PromptState>),
  Picker(Box<PickerState>),
  Confirm(Box<ConfirmState>),
}

#[derive(Debug, Clone)]
pub struct StatusMessage
{
  pub text:   String,
  expires_at: Instant,
}

/// Mutable application state driving the two-pane UI.
pub struct App
{
  pub records:           Vec<Record>,
  pub folder_filter:     String,
  pub search_query:      String,
  pub last_folder:       String,
  pub nav:               NavState,
  pub settings:          Settings,
  pub mode:              Mode,
  pub overlay:           Overlay,
  pub status:            Option<StatusMessage>,
  pub shortcuts_visible: bool,
  pub color_cursor:      usize,
  pub should_quit:       bool,
  pub force_full_redraw: bool,
  // Last drawn terminal area, kept so key handling between draws can answer
  // layout questions (is the detail pane on screen, how tall is the list).
  pub last_area:         Rect,
}

impl App
{
  /// Construct a session from the persisted collection and settings.
  pub fn new() -> Self
  {
    let records = store::load();
    let settings = store::load_settings();
    Self::with_records(records, settings)
  }

  /// Session over an explicit collection; what tests use.
  pub fn with_records(
    records: Vec<Record>,
    settings: Settings,
  ) -> Self
  {
    let color_cursor = crate::ui::colors::palette_index(settings.accent_color);
    Self {
      records,
      folder_filter: String::new(),
      search_query: String::new(),
      last_folder: record::DEFAULT_FOLDER.to_string(),
      nav: NavState::default(),
      settings,
      mode: Mode::Main,
      overlay: Overlay::None,
      status: None,
      shortcuts_visible: true,
      color_cursor,
      should_quit: false,
      force_full_redraw: false,
      last_area: Rect::new(0, 0, 80, 24),
    }
  }

  // ----- derived view -----

  pub fn visible(&self) -> Vec<(usize, &Record)>
  {
    filter::visible_items(&self.records, &self.folder_filter, &self.search_query)
  }

  pub fn visible_len(&self) -> usize
  {
    self.visible().len()
  }

  /// Absolute index and record under the cursor, if any.
  pub fn selected_record(&self) -> Option<(usize, Record)>
  {
    let items = self.visible();
    items.get(self.nav.selected).map(|(i, r)| (*i, (*r).clone()))
  }

  /// The four detail-pane lines for the current selection.
  pub fn detail_lines(&self) -> Vec<String>
  {
    match self.selected_record()
    {
      Some((_, r)) => vec![
        format!("Folder: {}", r.folder),
        format!("Title:  {}", r.title),
        format!("URL:    {}", r.url),
        format!("Note:   {}", r.note),
      ],
      None => Vec::new(),
    }
  }

  pub fn geometry(&self) -> Geometry
  {
    Geometry::compute(
      self.last_area.width,
      self.last_area.height,
      self.shortcuts_visible,
      self.status.is_some(),
    )
  }

  /// Detail rows currently on screen: zero when the pane is hidden or there
  /// is no selection.
  pub fn detail_rows_on_screen(&self) -> usize
  {
    if self.geometry().detail.is_none() || self.selected_record().is_none()
    {
      return 0;
    }
    DETAIL_ROWS
  }

  /// Re-establish the navigation invariants against the current visible set
  /// and geometry.
  pub fn clamp_nav(&mut self)
  {
    let visible = self.visible_len();
    self.nav.clamp_to(visible);
    let height = self.geometry().list_height();
    self.nav.ensure_visible(height);
    if self.detail_rows_on_screen() == 0
    {
      self.nav.focus = Focus::List;
    }
  }

  // ----- status -----

  pub fn set_status(
    &mut self,
    msg: &str,
  )
  {
    let text = msg.trim().to_string();
    if text.is_empty()
    {
      self.status = None;
      return;
    }
    crate::trace::log(format!("[status] {text}"));
    self.status =
      Some(StatusMessage { text, expires_at: Instant::now() + STATUS_TTL });
  }

  /// Drop an expired status; runs at the top of every loop iteration.
  pub fn tick_status(&mut self)
  {
    if let Some(ref s) = self.status
      && Instant::now() >= s.expires_at
    {
      self.status = None;
    }
  }

  // ----- flow starters -----

  pub fn open_search_prompt(&mut self)
  {
    self.search_query.clear();
    self.nav.reset();
    self.overlay =
      Overlay::Prompt(Box::new(PromptState::new("Search", "", PromptKind::Search)));
  }

  /// Live preview while the search prompt is being edited; fires only on
  /// content changes, never on pure cursor movement.
  pub fn preview_search(
    &mut self,
    current: &str,
  )
  {
    self.search_query = current.trim().to_string();
    self.nav.reset();
    self.nav.clamp_to(self.visible_len());
  }

  pub fn open_filter_picker(&mut self)
  {
    let mut options = vec![ALL_OPTION.to_string()];
    options.extend(record::folders(&self.records));
    let initial = if self.folder_filter.is_empty()
    {
      0
    }
    else
    {
      options.iter().position(|o| *o == self.folder_filter).unwrap_or(0)
    };
    self.overlay = Overlay::Picker(Box::new(PickerState::new(
      options,
      initial,
      PickerKind::Filter,
    )));
  }

  fn open_folder_picker(
    &mut self,
    target: FolderTarget,
    default: String,
  )
  {
    let mut options = vec![ADD_NEW_OPTION.to_string()];
    options.extend(record::folders(&self.records));
    let initial = options.iter().position(|o| *o == default).unwrap_or(0);
    self.overlay = Overlay::Picker(Box::new(PickerState::new(
      options,
      initial,
      PickerKind::Folder { target, default },
    )));
  }

  pub fn open_add_flow(&mut self)
  {
    let default = record::default_folder(&self.last_folder, &self.folder_filter);
    self.open_folder_picker(FolderTarget::Add, default);
  }

  pub fn open_move_picker(&mut self)
  {
    let Some((index, current)) = self.selected_record()
    else
    {
      self.set_status("Nothing to move.");
      return;
    };
    self.open_folder_picker(FolderTarget::Move { index }, current.folder);
  }

  pub fn open_edit_flow(&mut self)
  {
    let Some((index, current)) = self.selected_record()
    else
    {
      self.set_status("Nothing to edit.");
      return;
    };
    if self.nav.focus == Focus::Detail && self.detail_rows_on_screen() > 0
    {
      // One field, addressed by the detail cursor
      match self.nav.detail_cursor.min(DETAIL_ROWS - 1)
      {
        0 => self
          .open_folder_picker(FolderTarget::EditFolder { index }, current.folder),
        1 => self.open_prompt(
          "Edit title",
          &current.title,
          PromptKind::EditTitle { index },
        ),
        2 =>
        {
          self.open_prompt("Edit URL", &current.url, PromptKind::EditUrl { index })
        }
        _ => self
          .open_prompt("Edit note", &current.note, PromptKind::EditNote { index }),
      }
    }
    else
    {
      self.open_prompt(
        "Edit title",
        &current.title,
        PromptKind::EditAllTitle { index },
      );
    }
  }

  pub fn open_delete_confirm(&mut self)
  {
    let Some((index, _)) = self.selected_record()
    else
    {
      self.set_status("Nothing to delete.");
      return;
    };
    self.overlay = Overlay::Confirm(Box::new(ConfirmState {
      question: "Do you really want to delete this entry?".to_string(),
      kind:     ConfirmKind::DeleteRecord { index },
    }));
  }

  pub fn open_selected(&mut self)
  {
    let Some((_, current)) = self.selected_record()
    else
    {
      self.set_status("Nothing to open.");
      return;
    };
    if current.url.is_empty()
    {
      self.set_status("Bookmark has no URL.");
      return;
    }
    match crate::launch::open_url(&current.url)
    {
      Ok(()) => self.set_status(&format!("Opened {}", current.url)),
      Err(e) => self.set_status(&format!("Failed to open: {e}")),
    }
  }

  fn open_prompt(
    &mut self,
    label: &str,
    initial: &str,
    kind: PromptKind,
  )
  {
    self.overlay = Overlay::Prompt(Box::new(PromptState::new(label, initial, kind)));
  }

  // ----- settings -----

  pub fn enter_settings(&mut self)
  {
    self.mode = Mode::SettingsMenu;
    self.color_cursor = crate::ui::colors::palette_index(self.settings.accent_color);
  }

  pub fn leave_settings(&mut self)
  {
    self.mode = Mode::Main;
    self.force_full_redraw = true;
  }

  /// Change the accent and persist immediately; settings are never batched.
  pub fn apply_accent(
    &mut self,
    code: i16,
  )
  {
    self.settings.accent_color = code.clamp(-1, 255);
    if let Err(e) = store::save_settings(&self.settings)
    {
      self.set_status(&format!("Settings not saved: {e}"));
    }
    self.force_full_redraw = true;
  }

  // ----- overlay resolution -----

  /// A prompt resolved with `text` (already trimmed; empty on cancel).
  pub fn resolve_prompt(
    &mut self,
    kind: PromptKind,
    text: String,
  )
  {
    self.overlay = Overlay::None;
    match kind
    {
      PromptKind::Search =>
      {
        self.search_query = text;
        self.nav.reset();
        if self.search_query.is_empty()
        {
          self.set_status("Search cleared.");
        }
        else
        {
          let q = self.search_query.clone();
          self.set_status(&format!("Searching for '{q}'."));
        }
      }
      PromptKind::NewFolder { target, fallback } =>
      {
        let folder = if text.is_empty() { fallback } else { text };
        self.continue_with_folder(target, folder);
      }
      PromptKind::AddTitle { folder } =>
      {
        if text.is_empty()
        {
          self.set_status("Add canceled (empty title).");
          return;
        }
        self.open_prompt("URL", "", PromptKind::AddUrl { folder, title: text });
      }
      PromptKind::AddUrl { folder, title } =>
      {
        if text.is_empty()
        {
          self.set_status("Add canceled (empty URL).");
          return;
        }
        self.open_prompt(
          "Note (optional)",
          "",
          PromptKind::AddNote { folder, title, url: text },
        );
      }
      PromptKind::AddNote { folder, title, url } =>
      {
        match record::add_record(&mut self.records, &title, &url, &folder, &text)
        {
          Ok(_) =>
          {
            self.last_folder = folder;
            let visible = self.visible_len();
            if visible > 0
            {
              self.nav.selected = visible - 1;
            }
            self.clamp_nav();
            self.set_status(&format!("Added '{title}'."));
          }
          Err(e) => self.set_status(&format!("Add failed: {e}")),
        }
      }
      PromptKind::EditAllTitle { index } =>
      {
        if text.is_empty()
        {
          self.set_status("Edit canceled (empty title).");
          return;
        }
        let url = self.records.get(index).map(|r| r.url.clone()).unwrap_or_default();
        self.open_prompt(
          "Edit URL",
          &url,
          PromptKind::EditAllUrl { index, title: text },
        );
      }
      PromptKind::EditAllUrl { index, title } =>
      {
        if text.is_empty()
        {
          self.set_status("Edit canceled (empty URL).");
          return;
        }
        let note =
          self.records.get(index).map(|r| r.note.clone()).unwrap_or_default();
        self.open_prompt(
          "Edit note",
          &note,
          PromptKind::EditAllNote { index, title, url: text },
        );
      }
      PromptKind::EditAllNote { index, title, url } =>
      {
        // Folder survives a whole-record edit from the list pane
        let folder =
          self.records.get(index).map(|r| r.folder.clone()).unwrap_or_default();
        match record::update_record(
          &mut self.records,
          index,
          &title,
          &url,
          &folder,
          &text,
        )
        {
          Ok(()) =>
          {
            self.last_folder = folder;
            self.clamp_nav();
            self.set_status(&format!("Updated '{title}'."));
          }
          Err(e) => self.set_status(&format!("Edit failed: {e}")),
        }
      }
      PromptKind::EditTitle { index } =>
      {
        match record::set_title(&mut self.records, index, &text)
        {
          Ok(()) => self.set_status(&format!("Updated title to '{text}'.")),
          Err(_) => self.set_status("Edit canceled (empty title)."),
        }
        self.clamp_nav();
      }
      PromptKind::EditUrl { index } =>
      {
        match record::set_url(&mut self.records, index, &text)
        {
          Ok(()) => self.set_status("Updated URL."),
          Err(_) => self.set_status("Edit canceled (empty URL)."),
        }
        self.clamp_nav();
      }
      PromptKind::EditNote { index } =>
      {
        record::set_note(&mut self.records, index, &text);
        self.clamp_nav();
        self.set_status("Updated note.");
      }
    }
  }

  /// A picker resolved with `choice` (the initial option on cancel).
  pub fn resolve_picker(
    &mut self,
    kind: PickerKind,
    choice: String,
  )
  {
    self.overlay = Overlay::None;
    match kind
    {
      PickerKind::Filter =>
      {
        if choice == ALL_OPTION
        {
          self.folder_filter.clear();
          self.set_status("Filter cleared.");
        }
        else
        {
          self.folder_filter = choice;
          let f = self.folder_filter.clone();
          self.set_status(&format!("Filtering by '{f}'."));
        }
        self.nav.reset();
        self.clamp_nav();
      }
      PickerKind::Folder { target, default } =>
      {
        if choice == ADD_NEW_OPTION
        {
          self.open_prompt(
            "Folder",
            "",
            PromptKind::NewFolder { target, fallback: default },
          );
        }
        else
        {
          let folder = if choice.is_empty() { default } else { choice };
          self.continue_with_folder(target, folder);
        }
      }
    }
  }

  pub fn resolve_confirm(
    &mut self,
    kind: ConfirmKind,
    yes: bool,
  )
  {
    self.overlay = Overlay::None;
    let ConfirmKind::DeleteRecord { index } = kind;
    if !yes
    {
      return;
    }
    if let Some(removed) = record::remove_record(&mut self.records, index)
    {
      self.clamp_nav();
      self.set_status(&format!("Deleted '{}'.", removed.title));
    }
  }

  fn continue_with_folder(
    &mut self,
    target: FolderTarget,
    folder: String,
  )
  {
    match target
    {
      FolderTarget::Add =>
      {
        self.open_prompt("Title", "", PromptKind::AddTitle { folder });
      }
      FolderTarget::Move { index } =>
      {
        record::set_folder(&mut self.records, index, &folder);
        self.last_folder = folder.clone();
        self.clamp_nav();
        self.set_status(&format!("Moved to '{folder}'."));
      }
      FolderTarget::EditFolder { index } =>
      {
        record::set_folder(&mut self.records, index, &folder);
        self.last_folder = folder.clone();
        self.clamp_nav();
        self.set_status(&format!("Folder set to '{folder}'."));
      }
    }
  }
}

impl Default for App
{
  fn default() -> Self
  {
    Self::new()
  }
}
