//! Chess console
//!
//! Play a two-player game from the terminal, save it and resume it later.
//! Set `RUST_LOG=debug` to see move and storage logging on stderr.

mod command;
mod session;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chess_store::StoreConfig;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use command::{USAGE, parse_command};
use session::{Outcome, Session, is_rejected_move};

const DEFAULT_CONFIG: &str = "chess.toml";

fn print_usage() {
    println!("Chess console");
    println!();
    println!("Usage:");
    println!("  chess [--config <path>]");
    println!();
    println!("Reads store settings from {DEFAULT_CONFIG} when present.");
    println!();
    println!("{USAGE}");
}

/// Returns the config path, or `None` when only help was requested.
fn parse_args(args: &[String]) -> Result<Option<PathBuf>> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config needs a path");
                };
                config = PathBuf::from(path);
                i += 1;
            }
            "help" | "--help" | "-h" => return Ok(None),
            other => bail!("unexpected argument {other:?}"),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config_path) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let config = StoreConfig::load(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    debug!(?config, "store configuration");
    let repo = config.open().context("opening game store")?;
    let mut session = Session::new(repo);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Chess console. Type `start` to begin or `help` for commands.")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "error: {e:#}")?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(Outcome::Reply(text)) => writeln!(stdout, "{text}")?,
            Ok(Outcome::Quit) => {
                if session.game().is_some() && session.saved_id().is_none() {
                    writeln!(stdout, "unsaved game discarded")?;
                }
                break;
            }
            Err(e) => {
                if !is_rejected_move(&e) {
                    warn!(error = %format!("{e:#}"), "command failed");
                }
                writeln!(stdout, "error: {e:#}")?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}
