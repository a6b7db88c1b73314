//! One-shot engine query for the `suggest` command.

use noughts_core::{Board, BoardParseError, GameState, Player, choose};
use tracing::{info, instrument};

/// Reports where the computer would play on `board`.
///
/// The answer is `row col (tier)` with zero-based coordinates, or the
/// outcome if the board is already finished.
#[instrument]
pub fn suggest(board: &str) -> Result<String, BoardParseError> {
    let board: Board = board.parse()?;
    let game = GameState::resume(board, Player::Computer);

    if let Some(outcome) = game.outcome() {
        info!(%outcome, "Board already finished");
        return Ok(format!("Game over: {}", outcome));
    }

    // An unfinished board always has an empty cell.
    let answer = match choose(game.board()) {
        Some(choice) => format!(
            "{} {} ({})",
            choice.position().row(),
            choice.position().col(),
            choice.tier()
        ),
        None => "No empty cell".to_string(),
    };
    info!(%answer, "Suggested move");
    Ok(answer)
}
