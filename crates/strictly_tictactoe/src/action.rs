//! Moves as first-class values.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// The engine records every placement of a round in order; the front-end
/// uses the last one to animate the newest mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
