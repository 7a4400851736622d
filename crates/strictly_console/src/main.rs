//! Strictly Tic-Tac-Toe - terminal front-end
//!
//! Plays the engine in the terminal: mode menu, typed moves, and a short
//! pause before each computer move.

#![warn(missing_docs)]

mod cli;
mod console;
mod input;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::Console;
use std::time::Duration;
use strictly_tictactoe::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.engine_config();
    info!(?config, mode = ?cli.mode, "Starting console");

    let engine = GameEngine::new(config);
    let stdin = std::io::stdin();
    let mut console = Console::new(
        engine,
        stdin.lock(),
        std::io::stdout(),
        Duration::from_millis(cli.think_ms),
        cli.json,
    );
    console.run(cli.mode.map(Into::into))
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
