//! Computer opponent.
//!
//! A greedy one-ply rule: take a winning square if there is one, otherwise
//! block the opponent's winning square, otherwise play anywhere at random.
//! It never looks further ahead, so forks and double threats beat it.

use crate::rules::find_completing_move;
use crate::{Board, Mark, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the heuristic picked a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Reason {
    /// Completes a line for the computer.
    #[display("win")]
    Win,
    /// Occupies the opponent's winning square.
    #[display("block")]
    Block,
    /// No win or block was available.
    #[display("random")]
    Random,
}

/// Square chosen by [`choose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Empty square to play.
    pub position: Position,
    /// Rule that selected it.
    pub reason: Reason,
}

/// Picks a square for `mark` without touching the board.
///
/// Returns `None` only when the board has no empty square. The random
/// fallback draws uniformly from [`Board::empty_cells`] using `rng`.
#[instrument(skip(board, rng))]
pub fn choose_move<R>(board: &Board, mark: Mark, rng: &mut R) -> Option<Choice>
where
    R: Rng + ?Sized,
{
    let choice = if let Some(position) = find_completing_move(board, mark) {
        Choice {
            position,
            reason: Reason::Win,
        }
    } else if let Some(position) = find_completing_move(board, mark.opponent()) {
        Choice {
            position,
            reason: Reason::Block,
        }
    } else {
        let position = *board.empty_cells().choose(rng)?;
        Choice {
            position,
            reason: Reason::Random,
        }
    };

    debug!(position = %choice.position, reason = %choice.reason, "Computer chose move");
    Some(choice)
}
