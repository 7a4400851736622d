//! Draw detection logic for tic-tac-toe.

use super::win::find_winner;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner is a draw.
///
/// A board can be full and won at once; that is a win, not a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_winner(board).is_none()
}
