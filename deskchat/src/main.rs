//! `DeskChat` — single-process messaging demo with username autocomplete.
//!
//! Runs a line-oriented shell over the in-memory directory core: register
//! and log in users, send messages between them, and look usernames up by
//! prefix. Configuration via CLI flags, environment variables, or config
//! file (`~/.config/deskchat/config.toml`).
//!
//! ```bash
//! # Run the shell
//! cargo run --bin deskchat
//!
//! # Custom prompt and a longer users listing
//! cargo run --bin deskchat -- --prompt "chat> " --suggestion-limit 25
//!
//! # Or via environment variables
//! DESKCHAT_LOG=debug cargo run --bin deskchat
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use deskchat::commands::{Command, ParseError};
use deskchat::config::{CliArgs, ShellConfig};
use deskchat::session::Session;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match ShellConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging before the prompt starts (logs go to a file,
    // stdout belongs to the shell).
    let _log_guard = init_logging(&config.log_level, config.log_file.as_deref());

    tracing::info!("deskchat starting");

    let result = run_shell(&config);

    tracing::info!("deskchat exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since the shell owns it).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("deskchat.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Reads command lines from stdin until `quit` or end of input.
fn run_shell(config: &ShellConfig) -> io::Result<()> {
    let mut session = Session::new(config.suggestion_limit);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", session.prompt(&config.prompt))?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like `quit`.
            writeln!(stdout)?;
            return Ok(());
        }

        match Command::parse(&line) {
            Ok(command) => {
                for out in session.execute(command) {
                    writeln!(stdout, "{out}")?;
                }
                if session.should_quit {
                    return Ok(());
                }
            }
            // A blank line just re-prompts.
            Err(ParseError::Empty) => {}
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }
}
