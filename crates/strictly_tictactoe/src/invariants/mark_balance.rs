//! Mark balance invariant: X is never behind O, never more than one ahead.

use super::Invariant;
use crate::Mark;
use crate::engine::Round;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Round> for MarkBalanceInvariant {
    fn holds(round: &Round) -> bool {
        let x = round.board.count(Mark::X);
        let o = round.board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}
