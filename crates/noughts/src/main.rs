//! Noughts - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, ShellConfig, init_file_logging, init_stderr_logging, suggest, tui};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play { delay_ms: None }) {
        Command::Play { delay_ms } => {
            let config = match delay_ms {
                Some(delay_ms) => config.with_computer_delay_ms(delay_ms),
                None => config,
            };
            init_file_logging(&config)?;
            info!(?config, "Starting noughts");
            tui::run_tui(config.computer_delay()).await
        }
        Command::Suggest { board } => {
            init_stderr_logging(&config);
            let answer = suggest(&board).with_context(|| format!("Invalid board {:?}", board))?;
            println!("{}", answer);
            Ok(())
        }
    }
}
