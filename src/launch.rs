//! Hand-off to programs outside the terminal: the system URL opener and the
//! rofi dmenu picker.

use std::{
  io,
  io::Write,
  process::{
    Command,
    Stdio,
  },
};

use crate::core::record::{
  self,
  Record,
};

/// Open `url` with the platform opener, detached from our terminal.
pub fn open_url(url: &str) -> io::Result<()>
{
  let mut cmd = opener_command(url);
  cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
  cmd.spawn()?;
  Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command
{
  let mut cmd = Command::new("open");
  cmd.arg(url);
  cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command
{
  let mut cmd = Command::new("cmd");
  cmd.args(["/C", "start", "", url]);
  cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command
{
  let mut cmd = Command::new("xdg-open");
  cmd.arg(url);
  cmd
}

/// Offer every bookmark with a URL through `rofi -dmenu`; returns the chosen
/// URL, or `None` when the menu was dismissed or nothing matched.
pub fn pick_external(records: &[Record]) -> io::Result<Option<String>>
{
  let lines: Vec<String> = records
    .iter()
    .filter(|r| !r.url.is_empty())
    .map(Record::picker_line)
    .collect();
  if lines.is_empty()
  {
    return Ok(None);
  }

  let mut child = Command::new("rofi")
    .args(["-dmenu", "-p", "", "-i"])
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .spawn()?;
  if let Some(mut stdin) = child.stdin.take()
  {
    stdin.write_all(lines.join("\n").as_bytes())?;
  }
  let output = child.wait_with_output()?;
  if !output.status.success()
  {
    return Ok(None);
  }
  let chosen = String::from_utf8_lossy(&output.stdout).trim().to_string();
  if chosen.is_empty()
  {
    return Ok(None);
  }
  Ok(Some(record::url_from_picker_line(&chosen).to_string()))
}
