//! Engine error types.

use crate::{Mark, Position};
use derive_more::Display;

/// A move the engine refused. Nothing was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// Coordinates outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The round has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The caller does not control the mark that is due to move.
    #[display("It's {}'s turn", _0)]
    OutOfTurn(Mark),
}

impl std::error::Error for IllegalMove {}

/// Lifecycle phase of a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// No round has been started.
    #[display("idle")]
    Idle,
    /// A round is accepting moves.
    #[display("in progress")]
    InProgress,
    /// The round was won or drawn.
    #[display("finished")]
    Finished,
}

/// Error returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error, derive_more::From)]
pub enum EngineError {
    /// The move itself was rejected.
    #[display("Illegal move: {}", _0)]
    #[from]
    IllegalMove(#[error(not(source))] IllegalMove),

    /// The operation makes no sense in the current phase or mode.
    #[display("Cannot {} while the engine is {}", operation, phase)]
    InvalidModeTransition {
        /// Phase the engine was in.
        phase: Phase,
        /// What the caller tried to do.
        operation: &'static str,
    },
}

impl EngineError {
    /// Returns the rejected move, if this is an [`IllegalMove`].
    pub fn illegal_move(&self) -> Option<IllegalMove> {
        match self {
            EngineError::IllegalMove(err) => Some(*err),
            EngineError::InvalidModeTransition { .. } => None,
        }
    }
}
