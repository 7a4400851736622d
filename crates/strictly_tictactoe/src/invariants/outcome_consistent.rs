//! Outcome consistency invariant: status agrees with the board.

use super::Invariant;
use crate::engine::Round;
use crate::{Mark, Status};

/// Invariant: `Won(m)` exactly when `m` owns a line, `Draw` exactly when
/// the board is full without one, and the recorded winning line is the one
/// the scan reports.
pub struct OutcomeConsistentInvariant;

impl Invariant<Round> for OutcomeConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let board = &round.board;
        match round.state.status {
            Status::Won(mark) => {
                round.winning_line.is_some()
                    && board.find_line(mark) == round.winning_line
                    && board.find_line(mark.opponent()).is_none()
            }
            Status::Draw => {
                board.is_full()
                    && round.winning_line.is_none()
                    && [Mark::X, Mark::O].iter().all(|&m| board.find_line(m).is_none())
            }
            Status::InProgress => {
                !board.is_full()
                    && round.winning_line.is_none()
                    && [Mark::X, Mark::O].iter().all(|&m| board.find_line(m).is_none())
            }
        }
    }

    fn description() -> &'static str {
        "Status agrees with lines on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::play;
    use super::*;
    use crate::Position;

    #[test]
    fn test_won_round_holds() {
        let round = play(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        assert_eq!(round.state.status, Status::Won(Mark::X));
        assert!(OutcomeConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_unflagged_line_violates() {
        let mut round = play(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ]);
        round.board.place_at(Position::TopRight, Mark::X).unwrap();
        assert!(!OutcomeConsistentInvariant::holds(&round));
    }
}
