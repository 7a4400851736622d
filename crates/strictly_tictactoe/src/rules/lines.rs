//! The eight winning lines and their scan order.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Which kind of line a triple is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A row (0-2, top to bottom).
    Row(u8),
    /// A column (0-2, left to right).
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Three cells that win the game when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Row, column or diagonal.
    pub kind: LineKind,
    /// The three squares, in reading order.
    pub cells: [Position; 3],
}

impl Line {
    /// True if `pos` is one of this line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// All lines in scan order: rows, columns, diagonal, anti-diagonal.
///
/// The order decides which line is reported first; every search in the
/// crate walks this table front to back.
pub const LINES: [Line; 8] = [
    Line {
        kind: LineKind::Row(0),
        cells: [Position::TopLeft, Position::TopCenter, Position::TopRight],
    },
    Line {
        kind: LineKind::Row(1),
        cells: [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    },
    Line {
        kind: LineKind::Row(2),
        cells: [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    },
    Line {
        kind: LineKind::Column(0),
        cells: [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    },
    Line {
        kind: LineKind::Column(1),
        cells: [Position::TopCenter, Position::Center, Position::BottomCenter],
    },
    Line {
        kind: LineKind::Column(2),
        cells: [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    },
    Line {
        kind: LineKind::Diagonal,
        cells: [Position::TopLeft, Position::Center, Position::BottomRight],
    },
    Line {
        kind: LineKind::AntiDiagonal,
        cells: [Position::TopRight, Position::Center, Position::BottomLeft],
    },
];
