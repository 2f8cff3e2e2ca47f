//! Env-gated diagnostics log. Enabled with `MARKS_TRACE=1`; lines are
//! appended to `MARKS_TRACE_FILE` or a log under the temp directory.

use std::{
  fs::OpenOptions,
  io::Write,
  path::PathBuf,
};

fn enabled() -> bool
{
  std::env::var("MARKS_TRACE").map(|v| !v.is_empty() && v != "0").unwrap_or(false)
}

fn log_path() -> PathBuf
{
  if let Ok(fp) = std::env::var("MARKS_TRACE_FILE")
  {
    return PathBuf::from(fp);
  }
  std::env::temp_dir().join("marks-trace.log")
}

pub fn log<S: AsRef<str>>(s: S)
{
  if !enabled()
  {
    return;
  }
  let line = format!("{} {}\n", now_millis(), s.as_ref());
  let _ = OpenOptions::new()
    .create(true)
    .append(true)
    .open(log_path())
    .and_then(|mut f| f.write_all(line.as_bytes()));
}

/// Log the panic and restore the terminal so the message is visible rather
/// than swallowed by the alternate screen.
pub fn install_panic_hook()
{
  std::panic::set_hook(Box::new(|info| {
    let msg = if let Some(s) = info.payload().downcast_ref::<&str>()
    {
      s.to_string()
    }
    else if let Some(s) = info.payload().downcast_ref::<String>()
    {
      s.clone()
    }
    else
    {
      String::from("<non-string panic payload>")
    };
    let loc = info
      .location()
      .map(|l| format!("{}:{}", l.file(), l.line()))
      .unwrap_or_else(|| "<unknown>".to_string());
    let bt = std::backtrace::Backtrace::force_capture();
    log(format!("[panic] {msg} @ {loc}"));
    log(format!("[panic] backtrace:\n{bt}"));
    let _ = crossterm::terminal::disable_raw_mode();
    let mut out = std::io::stdout();
    let _ = crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen);
  }));
}

fn now_millis() -> u128
{
  use std::time::{
    SystemTime,
    UNIX_EPOCH,
  };
  SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis()).unwrap_or(0)
}
