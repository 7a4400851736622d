//! The 3x3 cell grid.

use crate::error::IllegalMove;
use crate::rules::{self, Line};
use crate::{Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from `Empty` to `Occupied`; there is no way to clear
/// a square short of replacing the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_coords(row, col).ok().map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Copies the cells out as a row-major 3x3 grid.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let mut grid = [[Cell::Empty; 3]; 3];
        for pos in Position::ALL {
            grid[pos.row()][pos.col()] = self.get(pos);
        }
        grid
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::OutOfRange`] for coordinates off the board and
    /// [`IllegalMove::Occupied`] if the square is taken. The board is left
    /// untouched in both cases.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<Position, IllegalMove> {
        let pos = Position::from_coords(row, col)?;
        self.place_at(pos, mark)?;
        Ok(pos)
    }

    /// Places `mark` at a known-valid position.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::Occupied`] if the square is taken.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> Result<(), IllegalMove> {
        if !self.is_empty(pos) {
            return Err(IllegalMove::Occupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(mark);
        trace!(%pos, %mark, "Mark placed");
        Ok(())
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// First complete line of `mark`, scanning rows, columns, then diagonals.
    pub fn find_line(&self, mark: Mark) -> Option<Line> {
        rules::find_line(self, mark)
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid, showing empty squares as their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
