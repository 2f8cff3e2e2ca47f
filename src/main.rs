use marks::{
  App,
  cli,
  runtime,
  trace,
};

fn print_version()
{
  println!("marks {}", env!("CARGO_PKG_VERSION"));
}

fn print_help()
{
  println!(
    "Usage: marks [OPTIONS]\n\n\
     Options:\n\
       -h, --help            Show this help and exit\n\
       -V, --version         Show version and exit\n\
       -a, --add             Add a bookmark from flags and exit\n\
       -l, --list            Print all bookmarks and exit\n\
       -r, --pick            Pick a bookmark via rofi and open it\n\
           --import FILE     Import a Netscape bookmarks HTML export\n\
       -n, --name NAME       Title for --add\n\
       -u, --url URL         URL for --add\n\
       -f, --folder FOLDER   Folder for --add (default: General)\n\
           --note NOTE       Note for --add\n\
           --include-note    Append notes to --list output\n\
           --trace[=FILE]    Enable tracing to FILE\n\n\
     With no mode option, marks starts the interactive TUI.\n"
  );
}

#[derive(Default)]
struct CliArgs
{
  add:          bool,
  list:         bool,
  pick:         bool,
  import:       Option<String>,
  name:         Option<String>,
  url:          Option<String>,
  folder:       Option<String>,
  note:         Option<String>,
  include_note: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  use std::env;
  trace::install_panic_hook();

  // Minimal argument parsing (avoid external deps)
  let mut args = env::args().skip(1);
  let mut parsed = CliArgs::default();
  while let Some(a) = args.next()
  {
    match a.as_str()
    {
      "-h" | "--help" =>
      {
        print_help();
        return Ok(());
      }
      "-V" | "--version" =>
      {
        print_version();
        return Ok(());
      }
      "-a" | "--add" => parsed.add = true,
      "-l" | "--list" => parsed.list = true,
      "-r" | "--pick" => parsed.pick = true,
      "--include-note" => parsed.include_note = true,
      "--import" =>
      {
        match args.next()
        {
          Some(file) => parsed.import = Some(file),
          None =>
          {
            eprintln!("marks: --import requires a FILE argument");
            std::process::exit(2);
          }
        }
      }
      s if s.starts_with("--import=") =>
      {
        if let Some((_, file)) = s.split_once('=')
        {
          parsed.import = Some(file.to_string());
        }
      }
      "-n" | "--name" => parsed.name = args.next(),
      "-u" | "--url" => parsed.url = args.next(),
      "-f" | "--folder" => parsed.folder = args.next(),
      "--note" => parsed.note = args.next(),
      s if s == "--trace" || s.starts_with("--trace=") =>
      {
        let file =
          if let Some(eq) = s.split_once('=') { eq.1.to_string() } else { String::new() };
        unsafe { env::set_var("MARKS_TRACE", "1") };
        if !file.is_empty()
        {
          unsafe { env::set_var("MARKS_TRACE_FILE", file) };
        }
      }
      s =>
      {
        eprintln!("marks: unknown option: {}", s);
        print_help();
        std::process::exit(2);
      }
    }
  }

  if let Some(file) = parsed.import
  {
    std::process::exit(cli::run_import(&file));
  }
  if parsed.add
  {
    std::process::exit(cli::run_add(
      parsed.name,
      parsed.url,
      parsed.folder.unwrap_or_else(|| "General".to_string()),
      parsed.note.unwrap_or_default(),
    ));
  }
  if parsed.list
  {
    std::process::exit(cli::run_list(parsed.include_note));
  }
  if parsed.pick
  {
    std::process::exit(cli::run_pick());
  }

  trace::log("[main] starting marks");
  let mut app = App::new();
  if let Err(e) = runtime::run_app(&mut app)
  {
    trace::log(format!("[error] runtime::run_app: {e}"));
    return Err(e);
  }
  Ok(())
}
