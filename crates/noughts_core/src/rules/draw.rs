//! Draw detection logic for tic-tac-toe.

use super::win::is_win;
use crate::{Board, Player};
use tracing::instrument;

/// Checks if the board has no empty cell left.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.empty_positions().next().is_none()
}

/// Checks for a drawn board: nobody has won and no empty cell remains.
///
/// A won board is never a draw, however full it is.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    if is_win(board, Player::Human) || is_win(board, Player::Computer) {
        return false;
    }
    is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_one_empty_cell_is_not_yet_a_draw() {
        let board: Board = "XOX/XOO/OX_".parse().unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X completes the main diagonal on the last cell.
        let board: Board = "XOO/OXX/XOX".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_win(&board, Player::Human));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_with_winner_is_not_draw() {
        let board: Board = "OOO/XX_/X__".parse().unwrap();
        assert!(!is_draw(&board));
    }
}
