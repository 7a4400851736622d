//! Command-line interface for the console front-end.

use clap::{Parser, ValueEnum};
use strictly_tictactoe::{EngineConfig, FirstMover, Mode};

/// Strictly Tic-Tac-Toe - play in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode; shows the mode menu when omitted
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Let the computer open (it then plays X)
    #[arg(long)]
    pub computer_first: bool,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before showing the computer's move, in milliseconds
    #[arg(long, default_value = "500")]
    pub think_ms: u64,

    /// Print each board as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Log engine activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Game modes accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Player vs player
    Pvp,
    /// Player vs computer
    Pvc,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Pvc => Mode::PlayerVsComputer,
        }
    }
}

impl Cli {
    /// Engine configuration for these flags.
    ///
    /// Auto-reply is always off: the console pauses before asking the
    /// engine for the computer's move.
    pub fn engine_config(&self) -> EngineConfig {
        let first_mover = if self.computer_first {
            FirstMover::Computer
        } else {
            FirstMover::Human
        };
        let config = EngineConfig::default()
            .with_first_mover(first_mover)
            .with_auto_reply(false);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
