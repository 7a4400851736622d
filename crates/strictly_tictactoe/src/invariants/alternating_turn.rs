//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::Mark;
use crate::engine::Round;

/// Invariant: marks alternate starting with X.
///
/// While the round is in progress the player to move is the opponent of
/// the last mover; once it is over, the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let alternates = round
            .history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        let expected = match round.history.last() {
            None => Mark::X,
            Some(last) if round.state.status.is_terminal() => last.mark,
            Some(last) => last.mark.opponent(),
        };
        round.state.current_player == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
