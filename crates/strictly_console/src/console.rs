//! The interactive loop: mode menu, rounds, and the computer's pause.

use crate::input::{Command, parse_command};
use crate::render::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_tictactoe::{GameEngine, GameView, Mode};
use tracing::{debug, info, instrument};

/// How a round ended from the console's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundExit {
    /// The round was won or drawn.
    Finished,
    /// The player asked for the menu.
    Menu,
    /// The player quit or input ended.
    Quit,
}

/// Terminal front-end over any line reader and writer.
pub struct Console<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    think: Duration,
    json: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console driving `engine`.
    pub fn new(engine: GameEngine, input: R, output: W, think: Duration, json: bool) -> Self {
        Self {
            engine,
            input,
            output,
            think,
            json,
        }
    }

    /// Plays rounds until the player quits.
    ///
    /// With a fixed `mode` the menu is skipped and declining a rematch exits.
    /// Typing `menu` always brings the menu back.
    #[instrument(skip(self))]
    pub fn run(&mut self, mode: Option<Mode>) -> Result<()> {
        info!(config = ?self.engine.config(), "Console starting");
        let mut fixed = mode;
        loop {
            let chosen = match fixed {
                Some(mode) => mode,
                None => match self.choose_mode()? {
                    Some(mode) => mode,
                    None => break,
                },
            };

            let exit = loop {
                match self.play_round(chosen)? {
                    RoundExit::Quit => return Ok(()),
                    RoundExit::Menu => break RoundExit::Menu,
                    RoundExit::Finished => {
                        if !self.ask_rematch()? {
                            break RoundExit::Finished;
                        }
                    }
                }
            };

            self.engine.reset();
            match exit {
                RoundExit::Menu => fixed = None,
                _ if fixed.is_some() => break,
                _ => {}
            }
        }
        info!("Console exiting");
        Ok(())
    }

    fn choose_mode(&mut self) -> Result<Option<Mode>> {
        loop {
            writeln!(self.output, "Tic Tac Toe")?;
            writeln!(self.output, "  1) Player vs Player")?;
            writeln!(self.output, "  2) Player vs Computer")?;
            writeln!(self.output, "  q) Exit")?;
            let Some(line) = self.prompt("> ")? else {
                return Ok(None);
            };
            match line.trim() {
                "1" => return Ok(Some(Mode::PlayerVsPlayer)),
                "2" => return Ok(Some(Mode::PlayerVsComputer)),
                "q" | "quit" | "exit" => return Ok(None),
                other => writeln!(self.output, "Unknown choice: {}", other)?,
            }
        }
    }

    fn play_round(&mut self, mode: Mode) -> Result<RoundExit> {
        let mut view = self.engine.start_game(mode);
        loop {
            self.show(&view)?;
            if view.status().is_terminal() {
                info!(mode = %view.mode(), winner = ?view.status().winner(), "Round finished");
                return Ok(RoundExit::Finished);
            }

            if !view.awaiting_human() {
                // Cosmetic pause; the engine has no notion of it.
                std::thread::sleep(self.think);
                view = self
                    .engine
                    .play_computer_move()
                    .context("computer move failed")?;
                continue;
            }

            let prompt = format!("Player {}> ", view.current_player());
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(RoundExit::Quit);
            };
            match parse_command(&line) {
                Some(Command::Place { row, col }) => match self.engine.submit_move(row, col) {
                    Ok(next) => view = next,
                    Err(e) => {
                        debug!(error = %e, "Rejected input");
                        writeln!(self.output, "{}", e)?;
                    }
                },
                Some(Command::Menu) => return Ok(RoundExit::Menu),
                Some(Command::Quit) => return Ok(RoundExit::Quit),
                None => writeln!(
                    self.output,
                    "Enter 'row col' (0-2), a square 1-9, 'menu' or 'quit'"
                )?,
            }
        }
    }

    fn ask_rematch(&mut self) -> Result<bool> {
        let answer = self.prompt("Play again? [y/N] ")?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes")
        ))
    }

    fn show(&mut self, view: &GameView) -> Result<()> {
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(view)?)?;
        } else {
            writeln!(self.output, "{}", render(view))?;
        }
        Ok(())
    }

    /// Prints `text` and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
