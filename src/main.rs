//! zcalc terminal front end.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use zcalc::config::Config;
use zcalc::logging::{LogConfig, init_logging};
use zcalc::ui::{Flow, OutputMode, Session, TerminalRenderer, parse_line};

/// A small arithmetic calculator with a recallable history.
///
/// With KEYS, the arguments are joined into one line of keystrokes and the
/// final result printed. Without KEYS, keystroke lines are read from stdin.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Config file (default: <config_dir>/zcalc/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print snapshots as JSON lines.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Keystroke lines, e.g. `12+3=` or `9 sqrt`.
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(
        &LogConfig::from_verbosity(&config.log.level, cli.verbose)
            .with_ansi(io::stderr().is_terminal()),
    );
    tracing::debug!(?config, "Loaded configuration");

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let renderer = TerminalRenderer::new(io::stdout().lock(), mode, config.display.clone());
    let mut session = Session::new(renderer).with_copy_on_equals(config.clipboard.copy_on_equals);

    if cli.keys.is_empty() {
        run_interactive(&mut session)
    } else {
        run_batch(&mut session, &cli.keys)
    }
}

/// Evaluate the arguments as one line and print the final snapshot once.
fn run_batch<W: Write>(session: &mut Session<TerminalRenderer<W>>, keys: &[String]) -> Result<()> {
    let commands = parse_line(&keys.join(" ")).context("Invalid keys")?;
    session
        .run_commands(commands)
        .context("Failed to write output")?;
    Ok(())
}

/// Read keystroke lines from stdin until EOF or `quit`.
fn run_interactive<W: Write>(session: &mut Session<TerminalRenderer<W>>) -> Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("zcalc: type keys such as 12+3= and press enter, 'help' for more");
    }

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        if session.run_line(&line).context("Failed to write output")? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
