//! History consistency invariant: the move list rebuilds the board.

use super::Invariant;
use crate::Board;
use crate::engine::Round;

/// Invariant: replaying the history onto an empty board gives the board.
///
/// Every occupied square has exactly one move behind it and no move ever
/// overwrote a square.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let mut rebuilt = Board::new();
        for mov in &round.history {
            if rebuilt.place_at(mov.position, mov.mark).is_err() {
                return false;
            }
        }
        rebuilt == round.board
    }

    fn description() -> &'static str {
        "Move history matches the board"
    }
}
