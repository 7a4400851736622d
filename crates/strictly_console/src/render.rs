//! Text rendering of a game view.

use strictly_tictactoe::{Cell, GameView, Position, Status};

/// Draws the board with the winning line in brackets, plus a status line.
pub fn render(view: &GameView) -> String {
    let mut out = String::new();
    for (row, cells) in view.board().rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let pos = Position::ALL[row * 3 + col];
            let symbol = match cell {
                Cell::Empty => (pos.to_index() + 1).to_string(),
                Cell::Occupied(mark) => mark.to_string(),
            };
            let highlighted = view
                .winning_line()
                .as_ref()
                .is_some_and(|line| line.contains(pos));
            if highlighted {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    if let Some(last) = view.last_move() {
        out.push_str(&format!("Last move: {}\n", last));
    }
    match view.status() {
        Status::InProgress => {
            out.push_str(&format!("Player {} to move\n", view.current_player()))
        }
        status => out.push_str(&format!("{}\n", status)),
    }
    out
}
