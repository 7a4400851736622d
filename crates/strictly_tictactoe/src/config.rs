//! Engine configuration.

use crate::Mark;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which side opens a player-vs-computer round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// The human plays X and opens.
    #[default]
    Human,
    /// The computer plays X and opens.
    Computer,
}

/// Options for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Who moves first against the computer.
    #[serde(default)]
    first_mover: FirstMover,

    /// Whether the engine answers a human move with the computer's move in
    /// the same call. Front-ends that pause before showing the computer's
    /// move turn this off and call `play_computer_move` themselves.
    #[serde(default = "default_auto_reply")]
    auto_reply: bool,

    /// Seed for the random fallback; `None` seeds from the OS.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_auto_reply() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::default(),
            auto_reply: default_auto_reply(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Mark the computer plays: X when it opens, O otherwise.
    #[instrument(skip(self), fields(first_mover = ?self.first_mover))]
    pub fn computer_mark(&self) -> Mark {
        match self.first_mover {
            FirstMover::Computer => Mark::X,
            FirstMover::Human => Mark::O,
        }
    }
}
