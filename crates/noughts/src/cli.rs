//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-Tac-Toe (Human vs. AI) in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, env = "NOUGHTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Milliseconds before the computer's mark appears
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print where the computer would move on a board
    Suggest {
        /// Nine cells, rows separated by '/', e.g. "XX_/_O_/___"
        board: String,
    },
}
