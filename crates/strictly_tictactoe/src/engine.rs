//! The game engine: one round at a time, human and computer moves.
//!
//! The engine owns the board and the turn state. A front-end drives it with
//! [`GameEngine::start_game`], [`GameEngine::submit_move`] and
//! [`GameEngine::reset`], and renders the [`GameView`] snapshots it returns.
//! Every rejected call leaves the engine exactly as it was.

use crate::config::EngineConfig;
use crate::error::{EngineError, IllegalMove, Phase};
use crate::heuristic;
use crate::invariants::assert_invariants;
use crate::rules::Line;
use crate::view::GameView;
use crate::{Board, GameState, Mark, Mode, Move, Position, Status};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Round - board and state of the game being played
// ─────────────────────────────────────────────────────────────

/// Board, turn state and move list of a single round.
#[derive(Debug, Clone)]
pub(crate) struct Round {
    pub(crate) board: Board,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
    pub(crate) winning_line: Option<Line>,
}

impl Round {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            state: GameState::new(mode),
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Places the current player's mark and evaluates the result.
    ///
    /// Win is checked before draw: the ninth mark can complete a line.
    pub(crate) fn apply(&mut self, pos: Position) -> Result<Status, IllegalMove> {
        if self.state.status.is_terminal() {
            return Err(IllegalMove::GameOver);
        }

        let mark = self.state.current_player;
        self.board.place_at(pos, mark)?;
        self.history.push(Move::new(mark, pos));

        if let Some(line) = self.board.find_line(mark) {
            self.state.status = Status::Won(mark);
            self.winning_line = Some(line);
            info!(%mark, kind = ?line.kind, "Round won");
        } else if self.board.is_full() {
            self.state.status = Status::Draw;
            info!("Round drawn");
        } else {
            self.state.current_player = mark.opponent();
        }

        assert_invariants(self);
        Ok(self.state.status)
    }
}

// ─────────────────────────────────────────────────────────────
//  Engine
// ─────────────────────────────────────────────────────────────

/// Tic-tac-toe engine.
///
/// Not reentrant: every mutating call takes `&mut self`. Share one engine
/// between callers behind a `Mutex`.
#[derive(Debug)]
pub struct GameEngine {
    config: EngineConfig,
    rng: StdRng,
    round: Option<Round>,
}

impl GameEngine {
    /// Creates an idle engine.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            round: None,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        match &self.round {
            None => Phase::Idle,
            Some(round) if round.state.status.is_terminal() => Phase::Finished,
            Some(_) => Phase::InProgress,
        }
    }

    /// Snapshot of the current round, or `None` while idle.
    pub fn view(&self) -> Option<GameView> {
        self.round
            .as_ref()
            .map(|round| snapshot(&self.config, round))
    }

    /// Mark played by the computer in this round, if any.
    pub fn computer_mark(&self) -> Option<Mark> {
        self.round
            .as_ref()
            .and_then(|round| computer_mark(&self.config, round.state.mode))
    }

    /// Starts a fresh round, discarding any previous one.
    ///
    /// When the computer opens and auto-reply is enabled, its first mark is
    /// already on the returned board.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, mode: Mode) -> GameView {
        info!(%mode, "Starting round");
        let mut round = Round::new(mode);

        if *self.config.auto_reply() && computer_mark(&self.config, mode) == Some(Mark::X) {
            play_heuristic(&mut round, &mut self.rng);
        }

        let view = snapshot(&self.config, &round);
        self.round = Some(round);
        view
    }

    /// Plays the human's move at `(row, col)`.
    ///
    /// In player-vs-computer mode with auto-reply enabled, the computer's
    /// answer is applied before returning, so one call may place two marks.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidModeTransition`] before `start_game`
    /// - [`IllegalMove::GameOver`] once the round is won or drawn
    /// - [`IllegalMove::OutOfTurn`] when the computer is due to move
    /// - [`IllegalMove::OutOfRange`] / [`IllegalMove::Occupied`] from the board
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<GameView, EngineError> {
        self.try_submit(row, col)
            .inspect_err(|e| warn!(error = %e, row, col, "Move rejected"))
    }

    fn try_submit(&mut self, row: usize, col: usize) -> Result<GameView, EngineError> {
        let Some(round) = self.round.as_mut() else {
            return Err(EngineError::InvalidModeTransition {
                phase: Phase::Idle,
                operation: "submit a move",
            });
        };
        if round.state.status.is_terminal() {
            return Err(IllegalMove::GameOver.into());
        }

        let computer = computer_mark(&self.config, round.state.mode);
        let to_move = round.state.current_player;
        if computer == Some(to_move) {
            return Err(IllegalMove::OutOfTurn(to_move).into());
        }

        let pos = Position::from_coords(row, col)?;
        let status = round.apply(pos)?;
        debug!(%pos, mark = %to_move, ?status, "Human move applied");

        if status == Status::InProgress && *self.config.auto_reply() && computer.is_some() {
            play_heuristic(round, &mut self.rng);
        }

        Ok(snapshot(&self.config, round))
    }

    /// Plays the computer's move now.
    ///
    /// This is the trigger for front-ends that run with auto-reply off and
    /// show their own delay or animation first.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidModeTransition`] while idle or in
    ///   player-vs-player mode
    /// - [`IllegalMove::GameOver`] once the round is over
    /// - [`IllegalMove::OutOfTurn`] while the human is due to move
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<GameView, EngineError> {
        self.try_computer_move()
            .inspect_err(|e| warn!(error = %e, "Computer move rejected"))
    }

    fn try_computer_move(&mut self) -> Result<GameView, EngineError> {
        let phase = self.phase();
        let Some(round) = self.round.as_mut() else {
            return Err(EngineError::InvalidModeTransition {
                phase,
                operation: "play a computer move",
            });
        };
        let Some(computer) = computer_mark(&self.config, round.state.mode) else {
            return Err(EngineError::InvalidModeTransition {
                phase,
                operation: "play a computer move in player-vs-player mode",
            });
        };
        if round.state.status.is_terminal() {
            return Err(IllegalMove::GameOver.into());
        }
        if round.state.current_player != computer {
            return Err(IllegalMove::OutOfTurn(round.state.current_player).into());
        }

        play_heuristic(round, &mut self.rng);
        Ok(snapshot(&self.config, round))
    }

    /// Returns to idle, discarding the round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.round.take().is_some() {
            info!("Round discarded");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn computer_mark(config: &EngineConfig, mode: Mode) -> Option<Mark> {
    match mode {
        Mode::PlayerVsComputer => Some(config.computer_mark()),
        Mode::PlayerVsPlayer => None,
    }
}

fn snapshot(config: &EngineConfig, round: &Round) -> GameView {
    GameView::new(
        round.board.clone(),
        round.state,
        round.winning_line,
        round.history.clone(),
        computer_mark(config, round.state.mode),
    )
}

/// Applies the heuristic's choice for the player to move.
fn play_heuristic(round: &mut Round, rng: &mut StdRng) {
    let mark = round.state.current_player;
    let Some(choice) = heuristic::choose_move(&round.board, mark, rng) else {
        // An in-progress round always has an empty square.
        warn!(%mark, "No empty square for computer move");
        return;
    };
    match round.apply(choice.position) {
        Ok(status) => debug!(
            pos = %choice.position,
            %mark,
            reason = %choice.reason,
            ?status,
            "Computer move applied"
        ),
        Err(e) => {
            warn!(error = %e, "Computer chose an illegal square");
            if cfg!(debug_assertions) {
                panic!("computer move rejected: {e}");
            }
        }
    }
}
