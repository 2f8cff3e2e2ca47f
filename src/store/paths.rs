use std::{
  env,
  path::{
    Path,
    PathBuf,
  },
};

/// Location of the bookmarks collection file.
///
/// Checks `MARKS_DATA_FILE`, then `XDG_DATA_HOME/marks/bookmarks.json`, then
/// `~/.local/share/marks/bookmarks.json`.
pub fn data_file() -> PathBuf
{
  if let Ok(file) = env::var("MARKS_DATA_FILE")
    && !file.trim().is_empty()
  {
    return PathBuf::from(file);
  }
  if let Ok(xdg) = env::var("XDG_DATA_HOME")
    && !xdg.trim().is_empty()
  {
    return Path::new(&xdg).join("marks").join("bookmarks.json");
  }
  home_dir().join(".local").join("share").join("marks").join("bookmarks.json")
}

/// Location of the settings record.
///
/// Checks `MARKS_CONFIG_DIR`, then `XDG_CONFIG_HOME/marks`, then
/// `~/.config/marks`; the file inside is always `settings.json`.
pub fn settings_file() -> PathBuf
{
  config_root().join("settings.json")
}

fn config_root() -> PathBuf
{
  if let Ok(dir) = env::var("MARKS_CONFIG_DIR")
    && !dir.trim().is_empty()
  {
    return PathBuf::from(dir);
  }
  if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
    && !xdg.trim().is_empty()
  {
    return Path::new(&xdg).join("marks");
  }
  home_dir().join(".config").join("marks")
}

fn home_dir() -> PathBuf
{
  #[cfg(windows)]
  {
    if let Ok(up) = env::var("USERPROFILE")
      && !up.trim().is_empty()
    {
      return PathBuf::from(up);
    }
  }
  if let Ok(home) = env::var("HOME")
    && !home.trim().is_empty()
  {
    return PathBuf::from(home);
  }
  PathBuf::from(".")
}
