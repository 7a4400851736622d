//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Who controls the two marks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mode {
    /// Two humans share the board.
    #[display("Player vs Player")]
    PlayerVsPlayer,
    /// One human plays against the built-in heuristic.
    #[display("Player vs Computer")]
    PlayerVsComputer,
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still accepted.
    InProgress,
    /// The given mark completed a line.
    Won(Mark),
    /// Board filled with no line.
    Draw,
}

impl Status {
    /// Returns true once the round has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Status::Won(mark) => Some(mark),
            Status::InProgress | Status::Draw => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "In progress"),
            Status::Won(mark) => write!(f, "Player {} wins!", mark),
            Status::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Turn owner, mode and status of a round.
///
/// `status` only ever leaves `InProgress` once, and `current_player`
/// stops alternating at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Mark whose turn it is (or who made the final move).
    pub current_player: Mark,
    /// Game mode chosen at start.
    pub mode: Mode,
    /// Round status.
    pub status: Status,
}

impl GameState {
    /// Creates the state of a fresh round: X to move, in progress.
    pub fn new(mode: Mode) -> Self {
        Self {
            current_player: Mark::X,
            mode,
            status: Status::InProgress,
        }
    }
}
