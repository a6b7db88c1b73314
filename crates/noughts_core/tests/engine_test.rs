//! Tests for the computer's move cascade against whole games.

use noughts_core::rules::{is_draw, winner};
use noughts_core::{Board, GameState, Phase, Player, Position, select_move};

/// Plays the engine against a human who always takes the first empty cell.
fn play_first_empty_human() -> GameState {
    let mut game = GameState::new();
    while !game.is_over() {
        match game.phase() {
            Phase::HumanTurn => {
                let pos = game
                    .board()
                    .empty_positions()
                    .next()
                    .expect("Open game has an empty cell");
                game.apply_human_move(pos).expect("Valid move");
            }
            Phase::ComputerTurn => {
                game.apply_computer_move().expect("Computer's turn");
            }
            Phase::GameOver(_) => unreachable!(),
        }
    }
    game
}

#[test]
fn test_engine_never_picks_occupied_cell() {
    let boards = [
        "___/___/___",
        "X__/_O_/___",
        "XOX/_O_/_X_",
        "OXO/_X_/XOX",
        "XOX/XOO/OX_",
    ];
    for text in boards {
        let board: Board = text.parse().unwrap();
        let pos = select_move(&board).expect("Board has an empty cell");
        assert!(board.is_empty(pos), "{text}: picked occupied {pos}");
    }
}

#[test]
fn test_engine_is_deterministic() {
    let board: Board = "X__/_O_/__X".parse().unwrap();
    let first = select_move(&board);
    for _ in 0..10 {
        assert_eq!(select_move(&board), first);
    }
}

#[test]
fn test_naive_human_loses() {
    let game = play_first_empty_human();
    assert_eq!(winner(game.board()), Some(Player::Computer));
    assert!(!is_draw(game.board()));
}

#[test]
fn test_game_never_runs_past_nine_moves() {
    let game = play_first_empty_human();
    assert!(game.history().len() <= 9);
    let marks = game.board().count(Player::Human) + game.board().count(Player::Computer);
    assert_eq!(marks, game.history().len());
}

#[test]
fn test_select_move_matches_position_table() {
    let board: Board = "___/_X_/___".parse().unwrap();
    assert_eq!(select_move(&board), Some(Position::CORNERS[0]));
}
