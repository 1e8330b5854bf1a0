mod report;

use chrono::Utc;
use meetright::{RosterStore, match_timezones};
use std::io::{self, IsTerminal};
use std::thread;
use std::time::Duration;

const DEFAULT_ROSTER_PATH: &str = "roster.json";
const TICK: Duration = Duration::from_secs(60);

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    command: Command,
    roster_path: String,
    color: bool,
    watch: bool,
}

enum Command {
    List,
    Add { name: String, timezone: String },
    Remove { id: String },
    Search { query: String },
}

fn run(config: CliConfig) -> Result<(), String> {
    let store = RosterStore::new(&config.roster_path);

    match config.command {
        Command::List => {
            let roster = store.load();
            if config.watch {
                loop {
                    report::clear_screen();
                    report::print_roster(&roster, Utc::now(), config.color);
                    thread::sleep(TICK);
                }
            }
            report::print_roster(&roster, Utc::now(), config.color);
            Ok(())
        }
        Command::Add { name, timezone } => {
            let mut roster = store.load();
            let resolved = resolve_timezone_query(&timezone)?;
            let id = roster.add(&name, &resolved).map_err(|err| err.to_string())?;
            store.save(&roster).map_err(|err| format!("failed to save roster: {err}"))?;
            println!("added {name} ({resolved}) as {id}");
            Ok(())
        }
        Command::Remove { id } => {
            let mut roster = store.load();
            if !roster.remove(&id) {
                return Err(format!("no member with id '{id}'"));
            }
            store.save(&roster).map_err(|err| format!("failed to save roster: {err}"))?;
            println!("removed {id}");
            Ok(())
        }
        Command::Search { query } => {
            let candidates = match_timezones(&query);
            if candidates.is_empty() {
                println!("no matches");
            }
            for candidate in candidates {
                println!("{candidate}");
            }
            Ok(())
        }
    }
}

/// Resolve an `add` timezone argument the way the search box would: exact
/// identifiers pass through, anything else goes through the matcher and is
/// auto-selected only when it yields a single candidate.
fn resolve_timezone_query(query: &str) -> Result<String, String> {
    if meetright::is_valid_timezone(query) {
        return Ok(query.to_string());
    }

    let candidates = match_timezones(query);
    match candidates.as_slice() {
        [only] => Ok(only.clone()),
        [] => Err(format!("no timezone matches '{query}'")),
        many => Err(format!("'{query}' is ambiguous; candidates: {}", many.join(", "))),
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut roster_path = DEFAULT_ROSTER_PATH.to_string();
    let mut color = io::stdout().is_terminal();
    let mut watch = false;
    let mut positional: Vec<String> = Vec::new();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("meetright {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--watch" => watch = true,
            "--roster" => {
                roster_path = args.next().ok_or_else(|| "error: --roster expects a path".to_string())?;
            }
            _ if arg.starts_with("--roster=") => {
                roster_path = arg.trim_start_matches("--roster=").to_string();
            }
            _ if arg.starts_with('-') && positional.is_empty() => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => positional.push(arg),
        }
    }

    let command = parse_command(positional)?;
    Ok(CliConfig { command, roster_path, color, watch })
}

fn parse_command(positional: Vec<String>) -> Result<Command, String> {
    let mut parts = positional.into_iter();
    let Some(name) = parts.next() else {
        return Ok(Command::List);
    };

    match name.as_str() {
        "list" => Ok(Command::List),
        "add" => {
            let member = parts.next().ok_or_else(|| "error: add expects <name> <timezone>".to_string())?;
            let rest: Vec<String> = parts.collect();
            if rest.is_empty() {
                return Err("error: add expects <name> <timezone>".to_string());
            }
            // Allow multi-word timezone queries like `add Ana buenos aires`.
            Ok(Command::Add { name: member, timezone: rest.join(" ") })
        }
        "remove" => {
            let id = parts.next().ok_or_else(|| "error: remove expects <id>".to_string())?;
            Ok(Command::Remove { id })
        }
        "search" => {
            let words: Vec<String> = parts.collect();
            if words.is_empty() {
                return Err("error: search expects <query>".to_string());
            }
            Ok(Command::Search { query: words.join(" ") })
        }
        other => Err(format!("error: unknown command '{other}'\n\n{}", help_text())),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "meetright {version}

Team timezone roster: local times and working-hours status per member.

Usage:
  meetright [OPTIONS] [list]
  meetright [OPTIONS] add <name> <timezone>
  meetright [OPTIONS] remove <id>
  meetright [OPTIONS] search <query>

Commands:
  list                 Show every member's local time and status (default).
  add                  Add a member. The timezone may be an exact identifier,
                       a search query with a single match, or GMT shorthand
                       like 'GMT+5'.
  remove               Remove a member by the id shown in the listing.
  search               Print the candidate identifiers for a query.

Options:
  --roster <path>      Roster file to load and save. Default: {default_path}
  --watch              With list: redraw every minute.
  --color              Force ANSI color output.
  --no-color           Disable ANSI color output.
  -h, --help           Show this help message.
  -V, --version        Print version information.

Exit codes:
  0  Success.
  1  Command failed (invalid timezone, unknown id, I/O error).
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        default_path = DEFAULT_ROSTER_PATH
    )
}
