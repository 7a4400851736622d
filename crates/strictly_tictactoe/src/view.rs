//! Read-only snapshot handed to front-ends.

use crate::rules::Line;
use crate::{Board, GameState, Mark, Mode, Move, Status};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front-end needs to draw the round.
///
/// Produced by the engine after every accepted operation. Owning a view
/// never gives access to the engine's board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct GameView {
    /// The board.
    board: Board,
    /// Turn owner, mode and status.
    state: GameState,
    /// Line to highlight when the round was won.
    winning_line: Option<Line>,
    /// Marks placed this round, oldest first.
    history: Vec<Move>,
    /// Mark the computer plays, in player-vs-computer mode.
    computer_mark: Option<Mark>,
}

impl GameView {
    /// Mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.state.current_player
    }

    /// Round status.
    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Game mode.
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// The most recent placement.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// True when the human may move now.
    pub fn awaiting_human(&self) -> bool {
        self.state.status == Status::InProgress
            && self.computer_mark != Some(self.state.current_player)
    }
}
