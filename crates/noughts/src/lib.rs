//! Noughts - tic-tac-toe against a heuristic computer opponent.
//!
//! The game logic lives in [`noughts_core`]; this crate is the terminal
//! shell around it.
//!
//! # Architecture
//!
//! - **Session**: owns the game and schedules the computer's delayed reply
//! - **TUI**: ratatui/crossterm window, keyboard and mouse input
//! - **CLI / Config / Logging**: command line, TOML settings, tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod session;
mod suggest;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ShellConfig};
pub use logging::{init_file_logging, init_stderr_logging};
pub use session::{PendingMove, Session, ShellEvent, status_text};
pub use suggest::suggest;
