//! Integration tests for the game flow: selection, turns, game over, restart

use match3::core::{
    is_quiescent, Board, GameConfig, GameState, RejectReason, Selection, TurnOutcome,
};
use match3::types::{GameStatus, Position, BOARD_SIZE, STARTING_MOVES};

// (0,2) <-> (0,3) completes 000 on top; (3,0) <-> (3,1) matches nothing.
const ONE_MOVE_BOARD: &str = "0010
                              1212
                              2121
                              1212";

fn small_game(moves: u32) -> GameState {
    let config = GameConfig {
        starting_moves: moves,
        ..GameConfig::default()
    };
    GameState::from_board(Board::parse(ONE_MOVE_BOARD).unwrap(), config, 3).unwrap()
}

#[test]
fn test_game_lifecycle() {
    let game = GameState::new(12345);
    assert_eq!(game.status(), GameStatus::Idle);
    assert_eq!(game.moves(), STARTING_MOVES);
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().size(), BOARD_SIZE);
    assert!(game.board().is_full());
    assert!(is_quiescent(game.board()));
}

#[test]
fn test_select_then_adjacent_press_swaps() {
    let game = small_game(5);

    let (game, first) = game.select(Position::new(0, 2));
    assert_eq!(first, Selection::Selected(Position::new(0, 2)));
    assert_eq!(game.selected(), Some(Position::new(0, 2)));

    let (game, second) = game.select(Position::new(0, 3));
    let Selection::Swapped(TurnOutcome::Resolved(report)) = second else {
        panic!("expected a resolved turn, got {:?}", second);
    };
    assert_eq!(report.swap, (Position::new(0, 2), Position::new(0, 3)));
    assert!(report.score() >= 30);
    assert_eq!(game.moves(), 4);
    assert_eq!(game.score(), report.score());
    assert_eq!(game.selected(), None);
    assert_eq!(game.status(), GameStatus::Idle);
}

#[test]
fn test_non_adjacent_press_clears_selection() {
    let game = small_game(5);
    let before = game.board().clone();

    let (game, _) = game.select(Position::new(1, 1));
    let (game, outcome) = game.select(Position::new(3, 3));
    assert_eq!(outcome, Selection::Cleared);
    assert_eq!(game.selected(), None);
    assert_eq!(game.board(), &before);
    assert_eq!(game.moves(), 5);
}

#[test]
fn test_swap_without_match_is_reverted_for_free() {
    let game = small_game(5);
    let before = game.board().clone();

    let (game, outcome) = game.try_swap(Position::new(3, 0), Position::new(3, 1));
    let TurnOutcome::Reverted { swapped } = &outcome else {
        panic!("expected a reverted swap, got {:?}", outcome);
    };
    assert_ne!(swapped, &before);
    assert_eq!(game.board(), &before);
    assert_eq!(game.moves(), 5);
    assert_eq!(game.score(), 0);
    assert_eq!(outcome.animation_ms(), 400);
}

#[test]
fn test_non_adjacent_swap_is_rejected() {
    let game = small_game(5);
    let (game, outcome) = game.try_swap(Position::new(0, 0), Position::new(1, 1));
    assert_eq!(outcome, TurnOutcome::Rejected(RejectReason::NotAdjacent));
    assert_eq!(game.moves(), 5);
}

#[test]
fn test_last_move_ends_game_and_blocks_input() {
    let game = small_game(1);
    let (game, outcome) = game.try_swap(Position::new(0, 2), Position::new(0, 3));
    let TurnOutcome::Resolved(report) = &outcome else {
        panic!("expected a resolved turn, got {:?}", outcome);
    };
    assert!(report.game_over);
    assert_eq!(report.moves_left, 0);
    assert!(game.game_over());
    assert_eq!(
        outcome.animation().last().map(|phase| phase.status),
        Some(GameStatus::GameOver)
    );

    let score = game.score();
    let board = game.board().clone();
    let (game, pressed) = game.select(Position::new(0, 0));
    assert_eq!(pressed, Selection::Ignored);
    let (game, outcome) = game.try_swap(Position::new(2, 2), Position::new(3, 2));
    assert_eq!(outcome, TurnOutcome::Rejected(RejectReason::GameOver));
    assert_eq!(game.score(), score);
    assert_eq!(game.board(), &board);
}

#[test]
fn test_new_game_resets_stats() {
    let game = small_game(1);
    let (game, _) = game.try_swap(Position::new(0, 2), Position::new(0, 3));
    assert!(game.game_over());

    let game = game.new_game();
    assert_eq!(game.status(), GameStatus::Idle);
    assert_eq!(game.moves(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.game_id(), 1);
    assert_eq!(game.board().size(), 4);
    assert!(game.board().is_full());
    assert!(is_quiescent(game.board()));
}

#[test]
fn test_full_game_keeps_invariants() {
    let mut game = GameState::new(4242);
    let mut last_score = 0;

    while !game.game_over() {
        let Some((a, b)) = game.hint() else { break };
        let moves = game.moves();
        let (next, outcome) = game.try_swap(a, b);
        assert!(matches!(outcome, TurnOutcome::Resolved(_)));
        game = next;

        assert_eq!(game.moves(), moves - 1);
        assert!(game.score() > last_score);
        last_score = game.score();

        let board = game.board();
        assert_eq!(board.size(), BOARD_SIZE);
        assert!(board.is_full());
        assert!(is_quiescent(board));
    }
}

#[test]
fn test_seeded_games_replay_identically() {
    let play = |seed| {
        let mut game = GameState::new(seed);
        for _ in 0..10 {
            let Some((a, b)) = game.hint() else { break };
            game = game.try_swap(a, b).0;
        }
        game.snapshot()
    };
    assert_eq!(play(77), play(77));
}
