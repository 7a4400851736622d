//! Tests for the game engine state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use strictly_tictactoe::{
    EngineConfig, EngineError, FirstMover, GameEngine, IllegalMove, LineKind, Mark, Mode, Phase,
    Position, Status,
};

fn engine() -> GameEngine {
    GameEngine::new(EngineConfig::default().with_seed(17))
}

fn play_all(engine: &mut GameEngine, moves: &[(usize, usize)]) -> strictly_tictactoe::GameView {
    let mut view = engine.view().expect("round started");
    for &(row, col) in moves {
        view = engine.submit_move(row, col).expect("Valid move");
    }
    view
}

#[test]
fn test_lifecycle() {
    let mut engine = engine();
    assert_eq!(engine.phase(), Phase::Idle);

    let view = engine.start_game(Mode::PlayerVsPlayer);
    assert_eq!(engine.phase(), Phase::InProgress);
    assert_eq!(view.current_player(), Mark::X);
    assert_eq!(view.status(), Status::InProgress);
    assert_eq!(view.board().empty_cells().len(), 9);

    let view = engine.submit_move(1, 1).expect("Valid move");
    assert_eq!(view.current_player(), Mark::O);
    assert_eq!(view.last_move().map(|m| m.position), Some(Position::Center));
}

#[test]
fn test_row_win_scenario() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);

    let view = play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 1)]);
    assert_eq!(view.status(), Status::InProgress);
    assert_eq!(view.current_player(), Mark::X);

    let view = engine.submit_move(0, 2).expect("Valid move");
    assert_eq!(view.status(), Status::Won(Mark::X));
    let line = view.winning_line().expect("winning line");
    assert_eq!(line.kind, LineKind::Row(0));
    assert_eq!(
        line.cells,
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(engine.phase(), Phase::Finished);
}

#[test]
fn test_draw_scenario() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);

    // X O X / X O O / O X X
    let view = play_all(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(view.status(), Status::Draw);
    assert!(view.winning_line().is_none());
    assert!(view.board().is_full());
}

#[test]
fn test_anti_diagonal_ends_round_before_board_fills() {
    // X at (0,0),(0,1),(1,2),(2,1),(2,2) and O at (0,2),(1,0),(1,1),(2,0)
    // puts O on the anti-diagonal, so O wins on its fourth mark.
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);

    let view = play_all(
        &mut engine,
        &[(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 1), (2, 0)],
    );
    assert_eq!(view.status(), Status::Won(Mark::O));
    assert_eq!(view.winning_line().map(|l| l.kind), Some(LineKind::AntiDiagonal));
    assert_eq!(
        engine.submit_move(2, 2).unwrap_err(),
        EngineError::IllegalMove(IllegalMove::GameOver)
    );
}

#[test]
fn test_win_checked_before_draw() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);

    // The ninth mark fills the board and completes row 0.
    let view = play_all(
        &mut engine,
        &[
            (1, 2),
            (1, 0),
            (2, 0),
            (1, 1),
            (0, 0),
            (2, 1),
            (0, 1),
            (2, 2),
            (0, 2),
        ],
    );
    assert!(view.board().is_full());
    assert_eq!(view.status(), Status::Won(Mark::X));
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);
    engine.submit_move(1, 1).expect("Valid move");
    let before = engine.view();

    let err = engine.submit_move(1, 1).unwrap_err();
    assert_eq!(err, EngineError::IllegalMove(IllegalMove::Occupied(Position::Center)));
    assert!(err.to_string().contains("occupied"));
    assert_eq!(engine.view(), before);
}

#[test]
fn test_out_of_range_changes_nothing() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);
    let before = engine.view();

    assert_eq!(
        engine.submit_move(3, 1).unwrap_err().illegal_move(),
        Some(IllegalMove::OutOfRange { row: 3, col: 1 })
    );
    assert_eq!(engine.view(), before);
}

#[test]
fn test_finished_round_rejects_moves() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);
    play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 1), (0, 2)]);
    let before = engine.view();

    assert_eq!(
        engine.submit_move(2, 2).unwrap_err(),
        EngineError::IllegalMove(IllegalMove::GameOver)
    );
    assert_eq!(engine.view(), before);
}

#[test]
fn test_move_before_start_is_invalid_transition() {
    let mut engine = engine();
    assert!(matches!(
        engine.submit_move(0, 0),
        Err(EngineError::InvalidModeTransition {
            phase: Phase::Idle,
            ..
        })
    ));
    assert!(matches!(
        engine.play_computer_move(),
        Err(EngineError::InvalidModeTransition { .. })
    ));
}

#[test]
fn test_random_games_alternate_and_agree_with_board() {
    for seed in 0..64 {
        let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed));
        let mut rng = StdRng::seed_from_u64(seed);
        let mut view = engine.start_game(Mode::PlayerVsPlayer);
        let mut expected = Mark::X;

        while view.status() == Status::InProgress {
            assert_eq!(view.current_player(), expected);
            let pos = *view.board().empty_cells().choose(&mut rng).expect("empty cell");
            view = engine.submit_move(pos.row(), pos.col()).expect("Valid move");
            assert_eq!(view.last_move().map(|m| m.mark), Some(expected));

            let x = view.board().count(Mark::X);
            let o = view.board().count(Mark::O);
            assert!(x == o || x == o + 1, "seed {seed}: X={x} O={o}");

            if view.status() == Status::InProgress {
                expected = expected.opponent();
            }
        }

        // The turn stays with whoever made the final move.
        assert_eq!(view.current_player(), expected);
        for mark in [Mark::X, Mark::O] {
            assert_eq!(
                view.status() == Status::Won(mark),
                view.board().find_line(mark).is_some(),
                "seed {seed}"
            );
        }
        if view.status() == Status::Draw {
            assert!(view.board().is_full());
        }
    }
}

#[test]
fn test_computer_replies_in_same_call() {
    let mut engine = engine();
    let view = engine.start_game(Mode::PlayerVsComputer);
    assert_eq!(view.computer_mark(), &Some(Mark::O));
    assert!(view.board().empty_cells().len() == 9);

    let view = engine.submit_move(1, 1).expect("Valid move");
    assert_eq!(view.history().len(), 2);
    assert_eq!(view.board().count(Mark::O), 1);
    assert_eq!(view.current_player(), Mark::X);
    assert!(view.awaiting_human());
}

#[test]
fn test_no_reply_after_round_ending_human_move() {
    let mut human_wins = 0;
    let mut ninth_mark_draws = 0;

    for first_mover in [FirstMover::Human, FirstMover::Computer] {
        for seed in 0..200 {
            let config = EngineConfig::default()
                .with_first_mover(first_mover)
                .with_seed(seed);
            let mut engine = GameEngine::new(config);
            let mut rng = StdRng::seed_from_u64(seed + 5000);
            let mut view = engine.start_game(Mode::PlayerVsComputer);

            while !view.status().is_terminal() {
                let human = view.current_player();
                let before = view.history().len();
                let choice = strictly_tictactoe::choose_move(view.board(), human, &mut rng)
                    .expect("empty cell");
                view = engine
                    .submit_move(choice.position.row(), choice.position.col())
                    .expect("Valid move");

                let placed = view.history().len() - before;
                let last = view.last_move().expect("move recorded");
                if last.mark != human {
                    assert_eq!(placed, 2, "seed {seed}");
                    continue;
                }

                // The human's mark ended the round: nothing was played after it.
                assert_eq!(placed, 1, "seed {seed}");
                assert_eq!(last.position, choice.position);
                match view.status() {
                    Status::Won(mark) => {
                        assert_eq!(mark, human);
                        human_wins += 1;
                    }
                    Status::Draw => {
                        assert_eq!(view.history().len(), 9);
                        ninth_mark_draws += 1;
                    }
                    Status::InProgress => panic!("computer skipped its reply, seed {seed}"),
                }
            }
            assert_eq!(engine.phase(), Phase::Finished);
        }
    }

    assert!(human_wins > 0);
    assert!(ninth_mark_draws > 0);
}

#[test]
fn test_computer_blocks_through_engine() {
    for seed in 0..32 {
        let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed));
        engine.start_game(Mode::PlayerVsComputer);
        let view = engine.submit_move(0, 0).expect("Valid move");
        let reply = view.last_move().expect("computer replied").position;
        if matches!(reply, Position::TopCenter | Position::TopRight) {
            continue;
        }

        let view = engine.submit_move(0, 1).expect("Valid move");
        let reply = view.last_move().expect("computer replied");
        assert_eq!(reply.mark, Mark::O);
        assert_eq!(reply.position, Position::TopRight, "seed {seed}");
    }
}

#[test]
fn test_computer_opens_when_configured() {
    let config = EngineConfig::default()
        .with_first_mover(FirstMover::Computer)
        .with_seed(3);
    let mut engine = GameEngine::new(config);

    let view = engine.start_game(Mode::PlayerVsComputer);
    assert_eq!(view.history().len(), 1);
    assert_eq!(view.last_move().map(|m| m.mark), Some(Mark::X));
    assert_eq!(view.current_player(), Mark::O);
    assert_eq!(engine.computer_mark(), Some(Mark::X));

    // Player-vs-player ignores the option.
    let view = engine.start_game(Mode::PlayerVsPlayer);
    assert!(view.history().is_empty());
    assert_eq!(view.current_player(), Mark::X);
}

#[test]
fn test_manual_trigger_flow() {
    let config = EngineConfig::default().with_auto_reply(false).with_seed(5);
    let mut engine = GameEngine::new(config);
    engine.start_game(Mode::PlayerVsComputer);

    assert_eq!(
        engine.play_computer_move().unwrap_err(),
        EngineError::IllegalMove(IllegalMove::OutOfTurn(Mark::X))
    );

    let view = engine.submit_move(0, 0).expect("Valid move");
    assert_eq!(view.history().len(), 1);
    assert_eq!(view.current_player(), Mark::O);
    assert!(!view.awaiting_human());

    // The human cannot move for the computer.
    let before = engine.view();
    assert_eq!(
        engine.submit_move(2, 2).unwrap_err(),
        EngineError::IllegalMove(IllegalMove::OutOfTurn(Mark::O))
    );
    assert_eq!(engine.view(), before);

    let view = engine.play_computer_move().expect("computer's turn");
    assert_eq!(view.history().len(), 2);
    assert_eq!(view.current_player(), Mark::X);
}

#[test]
fn test_computer_move_rejected_in_player_vs_player() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);
    let err = engine.play_computer_move().unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidModeTransition {
            phase: Phase::InProgress,
            ..
        }
    ));
    assert!(err.to_string().contains("player-vs-player"));
}

#[test]
fn test_computer_vs_itself_never_breaks_rules() {
    // Drive both sides with the heuristic until the round ends.
    for seed in 0..32 {
        let config = EngineConfig::default().with_auto_reply(false).with_seed(seed);
        let mut engine = GameEngine::new(config);
        let mut rng = StdRng::seed_from_u64(seed + 1000);
        let mut view = engine.start_game(Mode::PlayerVsComputer);

        while !view.status().is_terminal() {
            view = if view.awaiting_human() {
                let choice =
                    strictly_tictactoe::choose_move(view.board(), view.current_player(), &mut rng)
                        .expect("empty cell");
                engine
                    .submit_move(choice.position.row(), choice.position.col())
                    .expect("Valid move")
            } else {
                engine.play_computer_move().expect("computer's turn")
            };
        }
        assert!(view.history().len() >= 5);
    }
}

#[test]
fn test_restart_discards_previous_round() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);
    play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 1), (0, 2)]);

    let view = engine.start_game(Mode::PlayerVsPlayer);
    assert_eq!(view.status(), Status::InProgress);
    assert_eq!(view.current_player(), Mark::X);
    assert!(view.history().is_empty());

    engine.reset();
    assert_eq!(engine.phase(), Phase::Idle);
    assert!(engine.view().is_none());
}

#[test]
fn test_view_serializes_for_front_ends() {
    let mut engine = engine();
    engine.start_game(Mode::PlayerVsPlayer);
    let view = play_all(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 1), (0, 2)]);

    let json = serde_json::to_value(&view).expect("serializable");
    assert_eq!(json["state"]["status"], serde_json::json!({ "Won": "X" }));
    assert_eq!(json["state"]["mode"], "PlayerVsPlayer");
    assert_eq!(json["history"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["winning_line"]["kind"], serde_json::json!({ "Row": 0 }));

    let back: strictly_tictactoe::GameView = serde_json::from_value(json).expect("round trip");
    assert_eq!(back, view);
}
