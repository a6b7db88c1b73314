//! Pure tic-tac-toe logic for a human-versus-computer game.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`], [`Position`]
//! - **Rules**: win and draw evaluation ([`rules`])
//! - **Engine**: the computer's fixed-priority move heuristic ([`engine`])
//! - **Game**: the turn controller ([`GameState`]) tying them together
//!
//! Nothing here performs I/O; a front end owns a [`GameState`], forwards
//! human moves into it and asks it for the computer's reply.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameState, Phase, Position};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.apply_human_move(Position::Center), Ok(Phase::ComputerTurn));
//!
//! let reply = game.apply_computer_move().unwrap();
//! assert_eq!(reply.position(), &Position::TopLeft);
//! assert_eq!(game.phase(), Phase::HumanTurn);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod engine;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::{Choice, Tier, choose, select_move};
pub use game::{ComputerMove, GameState, Outcome, Phase};
pub use position::Position;
pub use types::{Board, BoardParseError, Cell, Player};
