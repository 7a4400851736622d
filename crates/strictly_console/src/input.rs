//! Parsing of typed commands.

use strictly_tictactoe::Position;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at `(row, col)`; range is checked by the engine.
    Place {
        /// Row (0-based).
        row: usize,
        /// Column (0-based).
        col: usize,
    },
    /// Leave the round and return to the mode menu.
    Menu,
    /// Exit the program.
    Quit,
}

/// Parses `row col`, `row,col`, a square number 1-9, a square label,
/// `menu` or `quit`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "menu" | "m" => return Some(Command::Menu),
        "quit" | "q" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => Some(Command::Place {
            row: row.parse().ok()?,
            col: col.parse().ok()?,
        }),
        _ => Position::from_label_or_number(line).map(|pos| Command::Place {
            row: pos.row(),
            col: pos.col(),
        }),
    }
}
