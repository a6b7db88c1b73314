//! Terminal presentation shell.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};
pub use ui::{BoardHitMap, TITLE, draw};

use crate::session::{Session, ShellEvent};
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

/// Runs the game window until the user quits.
///
/// The terminal is restored even when setup or the loop fails.
#[instrument]
pub async fn run_tui(computer_delay: Duration) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let res = match enter_screen() {
        Ok(mut terminal) => {
            let (event_tx, mut event_rx) = mpsc::unbounded_channel();
            let app = App::new(Session::new(computer_delay, event_tx));
            run_app(&mut terminal, app, &mut event_rx).await
        }
        Err(err) => Err(err),
    };

    restore_terminal(&mut io::stdout());

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undoes raw mode, the alternate screen and mouse capture.
///
/// Each step runs even if an earlier one failed.
fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
    if let Err(err) = execute!(out, cursor::Show) {
        warn!(error = %err, "Failed to show cursor");
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    event_rx: &mut mpsc::UnboundedReceiver<ShellEvent>,
) -> Result<()> {
    loop {
        let mut hit_map = BoardHitMap::default();
        terminal.draw(|f| hit_map = draw(f, &app))?;
        app.set_hit_map(hit_map);

        // Deliver computer moves whose delay has elapsed.
        while let Ok(shell_event) = event_rx.try_recv() {
            app.handle_event(shell_event);
        }

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(50))? {
            let input = event::read()?;
            if let Some(action) = action_for(&input, app.hit_map()) {
                app.apply(action);
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        // Let the delay task run between polls.
        tokio::task::yield_now().await;
    }
}
