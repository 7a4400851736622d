//! Strictly Tic-Tac-Toe - the game engine behind the console front-end.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, placement and line queries
//! - **Rules**: the eight lines in fixed scan order, win/draw checks
//! - **Heuristic**: the computer opponent (win, block, else random)
//! - **Engine**: turn state, mode, validation and the computer's reply
//!
//! Front-ends never touch the board directly: they call the engine and
//! render the [`GameView`] it hands back.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{EngineConfig, GameEngine, Mark, Mode, Status};
//!
//! let mut engine = GameEngine::new(EngineConfig::default().with_seed(7));
//! engine.start_game(Mode::PlayerVsPlayer);
//! engine.submit_move(0, 0)?;
//! let view = engine.submit_move(1, 1)?;
//! assert_eq!(view.current_player(), Mark::X);
//! assert_eq!(view.status(), Status::InProgress);
//! # Ok::<(), strictly_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod engine;
mod error;
mod heuristic;
mod invariants;
mod position;
mod types;
mod view;

pub mod rules;

pub use action::Move;
pub use board::Board;
pub use config::{EngineConfig, FirstMover};
pub use engine::GameEngine;
pub use error::{EngineError, IllegalMove, Phase};
pub use heuristic::{Choice, Reason, choose_move};
pub use position::Position;
pub use rules::{Line, LineKind};
pub use types::{Cell, GameState, Mark, Mode, Status};
pub use view::GameView;
