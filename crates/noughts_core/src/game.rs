//! Turn controller for a human-versus-computer game.
//!
//! ```text
//!            human move              computer move
//! HumanTurn ───────────▶ ComputerTurn ─────────────▶ HumanTurn
//!     │                        │
//!     └── win / full ──▶ GameOver(outcome) ◀── win / full
//! ```
//!
//! `reset` returns any phase to `HumanTurn`. Every rejected operation
//! leaves the state exactly as it was.

use super::action::{Move, MoveError};
use super::engine::{self, Tier};
use super::rules::{is_full, is_win, winner};
use super::{Board, Cell, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The human completed a line.
    #[display("Human (X) wins")]
    HumanWins,
    /// The computer completed a line.
    #[display("Computer (O) wins")]
    ComputerWins,
    /// The board filled up with no line completed.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::HumanWins => Some(Player::Human),
            Outcome::ComputerWins => Some(Player::Computer),
            Outcome::Draw => None,
        }
    }

    fn won_by(player: Player) -> Self {
        match player {
            Player::Human => Outcome::HumanWins,
            Player::Computer => Outcome::ComputerWins,
        }
    }
}

/// Whose turn it is, or how the game ended.
///
/// A finished game always carries its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human.
    HumanTurn,
    /// Waiting for the computer.
    ComputerTurn,
    /// No further moves are accepted.
    GameOver(Outcome),
}

impl Phase {
    fn turn_of(player: Player) -> Self {
        match player {
            Player::Human => Phase::HumanTurn,
            Player::Computer => Phase::ComputerTurn,
        }
    }
}

/// What the computer did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct ComputerMove {
    /// Where the computer played.
    position: Position,
    /// Strategy that picked the cell.
    tier: Tier,
    /// Phase after the move.
    phase: Phase,
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
}

impl GameState {
    /// Starts a new game: empty board, human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::HumanTurn,
            history: Vec::new(),
        }
    }

    /// Builds a state around an existing board.
    ///
    /// A board that already has a winner or no empty cell is `GameOver`;
    /// otherwise it is `to_move`'s turn. History starts empty.
    #[instrument(skip(board), fields(board = %board))]
    pub fn resume(board: Board, to_move: Player) -> Self {
        let phase = settle(&board).unwrap_or(Phase::turn_of(to_move));
        debug!(?phase, "Resumed game");
        Self {
            board,
            phase,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            Phase::HumanTurn | Phase::ComputerTurn => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The player expected to move, `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            Phase::HumanTurn => Some(Player::Human),
            Phase::ComputerTurn => Some(Player::Computer),
            Phase::GameOver(_) => None,
        }
    }

    /// Moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Places the human's mark at a zero-based row and column.
    ///
    /// Returns the phase after the move. Off-board coordinates are rejected
    /// like any other illegal move.
    #[instrument(skip(self))]
    pub fn attempt_human_move(&mut self, row: usize, col: usize) -> Result<Phase, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        self.apply_human_move(pos)
    }

    /// Places the human's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Rejected without any change when the game is over, it is the
    /// computer's turn, or the cell is occupied.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply_human_move(&mut self, pos: Position) -> Result<Phase, MoveError> {
        self.check_turn(Player::Human)?;
        self.place(Move::new(Player::Human, pos))
    }

    /// Lets the engine pick a cell and places the computer's mark there.
    ///
    /// # Errors
    ///
    /// Rejected without any change unless it is the computer's turn.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply_computer_move(&mut self) -> Result<ComputerMove, MoveError> {
        self.check_turn(Player::Computer)?;

        // ComputerTurn is only entered with an empty cell left.
        let choice = engine::choose(&self.board).ok_or(MoveError::GameOver)?;
        let phase = self.place(Move::new(Player::Computer, *choice.position()))?;

        Ok(ComputerMove {
            position: *choice.position(),
            tier: *choice.tier(),
            phase,
        })
    }

    /// Clears the board and gives the first move back to the human.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        match self.phase {
            Phase::GameOver(_) => Err(MoveError::GameOver),
            phase if phase != Phase::turn_of(player) => Err(MoveError::NotYourTurn(player)),
            _ => Ok(()),
        }
    }

    fn place(&mut self, action: Move) -> Result<Phase, MoveError> {
        if !self.board.is_empty(action.position) {
            debug!(position = %action.position, "Rejected move onto occupied cell");
            return Err(MoveError::SquareOccupied(action.position));
        }

        self.board.set(action.position, Cell::Marked(action.player));
        self.history.push(action);

        // A line completed by this move wins even if it also filled the board.
        self.phase = if is_win(&self.board, action.player) {
            Phase::GameOver(Outcome::won_by(action.player))
        } else if is_full(&self.board) {
            Phase::GameOver(Outcome::Draw)
        } else {
            Phase::turn_of(action.player.opponent())
        };

        info!(%action, phase = ?self.phase, "Move applied");
        Ok(self.phase)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The terminal phase a board has already reached, if any.
fn settle(board: &Board) -> Option<Phase> {
    if let Some(player) = winner(board) {
        Some(Phase::GameOver(Outcome::won_by(player)))
    } else if is_full(board) {
        Some(Phase::GameOver(Outcome::Draw))
    } else {
        None
    }
}
