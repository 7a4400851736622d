//! Win detection logic for tic-tac-toe.

use super::lines::{LINES, Line};
use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// Returns the first line whose three cells all hold `mark`.
#[instrument(skip(board))]
pub fn find_line(board: &Board, mark: Mark) -> Option<Line> {
    LINES
        .iter()
        .find(|line| line.cells.iter().all(|&pos| board.get(pos) == Cell::Occupied(mark)))
        .copied()
}

/// Checks if either mark has three in a row.
///
/// X is scanned first; on a legally reached board at most one mark can
/// own a line, so the order does not matter outside of tests.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<(Mark, Line)> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| find_line(board, mark).map(|line| (mark, line)))
}

/// Finds the empty square that would complete a line for `mark`.
///
/// Scans the lines in order and returns the open cell of the first line
/// holding exactly two of `mark` and one empty square.
#[instrument(skip(board))]
pub fn find_completing_move(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let mut open = None;
        let mut owned = 0;
        for &pos in &line.cells {
            match board.get(pos) {
                Cell::Occupied(m) if m == mark => owned += 1,
                Cell::Empty => open = Some(pos),
                Cell::Occupied(_) => return None,
            }
        }
        if owned == 2 { open } else { None }
    })
}
