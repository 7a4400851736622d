//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine, the heuristic and the invariant checks all
//! evaluate lines the same way.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{LINES, Line, LineKind};
pub use win::{find_completing_move, find_line, find_winner};
