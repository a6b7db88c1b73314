//! Heuristic move selection for the computer player.
//!
//! The computer walks a fixed cascade of strategies and plays the first
//! cell any of them yields. There is no scoring and no look-ahead beyond a
//! single hypothetical mark, so the opponent is beatable: when the human
//! holds two open threats at once only the first one (row-major) is blocked.

use crate::rules::is_win;
use crate::{Board, Cell, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A strategy step in the cascade, highest priority first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// Complete a computer line.
    Win,
    /// Occupy the cell that would complete a human line.
    Block,
    /// Take the middle cell.
    Center,
    /// Take a corner.
    Corner,
    /// Take an edge midpoint.
    Side,
    /// First empty cell. Unreachable on a board with any empty cell.
    Fallback,
}

/// The engine's pick and the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Choice {
    /// Cell to play.
    position: Position,
    /// Strategy that picked it.
    tier: Tier,
}

/// Picks the computer's next cell.
///
/// Returns `None` only for a full board.
pub fn select_move(board: &Board) -> Option<Position> {
    choose(board).map(|choice| choice.position)
}

/// Runs the cascade and reports which tier fired.
#[instrument(skip(board), fields(board = %board))]
pub fn choose(board: &Board) -> Option<Choice> {
    let found = completing_cell(board, Player::Computer)
        .map(|pos| (pos, Tier::Win))
        .or_else(|| completing_cell(board, Player::Human).map(|pos| (pos, Tier::Block)))
        .or_else(|| {
            board
                .is_empty(Position::Center)
                .then_some((Position::Center, Tier::Center))
        })
        .or_else(|| first_empty(board, &Position::CORNERS).map(|pos| (pos, Tier::Corner)))
        .or_else(|| first_empty(board, &Position::SIDES).map(|pos| (pos, Tier::Side)))
        .or_else(|| board.empty_positions().next().map(|pos| (pos, Tier::Fallback)));

    match found {
        Some((position, tier)) => {
            debug!(position = %position, tier = %tier, "Computer chose cell");
            Some(Choice { position, tier })
        }
        None => {
            debug!("No empty cell left to choose");
            None
        }
    }
}

/// First empty cell (row-major) where a `player` mark would complete a line.
///
/// Each candidate is tried on a scratch copy, so `board` is never touched.
fn completing_cell(board: &Board, player: Player) -> Option<Position> {
    board.empty_positions().find(|&pos| {
        let mut probe = *board;
        probe.set(pos, Cell::Marked(player));
        is_win(&probe, player)
    })
}

fn first_empty(board: &Board, preference: &[Position]) -> Option<Position> {
    preference.iter().copied().find(|&pos| board.is_empty(pos))
}
