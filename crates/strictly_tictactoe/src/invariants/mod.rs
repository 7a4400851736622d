//! Invariants checked after every placement.
//!
//! Each invariant is a logical property of a [`Round`] that the engine's
//! transitions must preserve. They compose into sets through tuples and run
//! in [`assert_invariants`]; a violation is logged and, in debug builds,
//! panics.

use crate::engine::Round;
use tracing::warn;

mod alternating_turn;
mod history_consistent;
mod mark_balance;
mod outcome_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation {
                            description: $inv::description(),
                        });
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every invariant of a round.
pub type RoundInvariants = (
    MarkBalanceInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    OutcomeConsistentInvariant,
);

/// Checks [`RoundInvariants`], panicking on violation in debug builds.
pub(crate) fn assert_invariants(round: &Round) {
    if let Err(violations) = RoundInvariants::check_all(round) {
        for violation in &violations {
            warn!(invariant = violation.description, "Invariant violated");
        }
        if cfg!(debug_assertions) {
            panic!("Round invariants violated: {:?}", violations);
        }
    }
}
