//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use tracing::instrument;

/// The eight lines that win the game: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` owns all three cells of any line.
#[instrument(skip(board))]
pub fn is_win(board: &Board, player: Player) -> bool {
    let mark = Cell::Marked(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Returns the player holding a complete line, if any.
///
/// Human lines are checked first. Legal play never produces two winners.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| is_win(board, player))
}
