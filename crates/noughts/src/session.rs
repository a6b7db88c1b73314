//! The interactive session behind the terminal shell.
//!
//! A [`Session`] owns the one [`GameState`] of the window. Human moves are
//! applied immediately; the computer's reply is deferred by a short delay so
//! the human sees their own mark first. The delay runs as a one-shot tokio
//! task that posts [`ShellEvent::ComputerMoveDue`] back to the event loop.
//!
//! Each reset starts a new game generation. Pending replies are aborted on
//! reset, and a due event is only honoured when its generation is current
//! and the game is still waiting on the computer, so a reply scheduled for
//! an old board can never land on a fresh one.

use noughts_core::{ComputerMove, GameState, MoveError, Outcome, Phase, Position};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Messages delivered to the shell's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The computer's delay elapsed for the given game generation.
    ComputerMoveDue {
        /// Generation the reply was scheduled for.
        generation: u64,
    },
}

/// A scheduled computer reply. Aborted when dropped.
#[derive(Debug)]
pub struct PendingMove {
    generation: u64,
    handle: JoinHandle<()>,
}

impl PendingMove {
    /// Spawns a task that posts [`ShellEvent::ComputerMoveDue`] after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(events))]
    pub fn schedule(
        generation: u64,
        delay: Duration,
        events: mpsc::UnboundedSender<ShellEvent>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events
                .send(ShellEvent::ComputerMoveDue { generation })
                .is_err()
            {
                debug!(generation, "Event loop gone, dropping computer move");
            }
        });
        Self { generation, handle }
    }

    /// Generation this reply belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for PendingMove {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(generation = self.generation, "Cancelling pending computer move");
            self.handle.abort();
        }
    }
}

/// One player's window onto a game against the computer.
#[derive(Debug)]
pub struct Session {
    game: GameState,
    generation: u64,
    pending: Option<PendingMove>,
    delay: Duration,
    events: mpsc::UnboundedSender<ShellEvent>,
}

impl Session {
    /// Creates a session with a fresh game.
    ///
    /// Computer replies are posted to `events` after `delay`.
    #[instrument(skip(events))]
    pub fn new(delay: Duration, events: mpsc::UnboundedSender<ShellEvent>) -> Self {
        info!("Creating session");
        Self {
            game: GameState::new(),
            generation: 0,
            pending: None,
            delay,
            events,
        }
    }

    /// The current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Number of resets so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a computer reply is scheduled.
    pub fn is_computer_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forwards a human click to the game.
    ///
    /// When the move hands the turn to the computer its reply is scheduled.
    /// Rejected clicks change nothing.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn click(&mut self, pos: Position) -> Result<Phase, MoveError> {
        let phase = self.game.apply_human_move(pos).inspect_err(|e| {
            debug!(error = %e, "Ignoring click");
        })?;

        if phase == Phase::ComputerTurn {
            self.pending = Some(PendingMove::schedule(
                self.generation,
                self.delay,
                self.events.clone(),
            ));
        }
        Ok(phase)
    }

    /// Starts a new game, discarding any scheduled computer reply.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) {
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
        self.game.reset();
        info!(generation = self.generation, "Session reset");
    }

    /// Applies a shell event to the game.
    ///
    /// Returns the computer's move if one was made.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn handle(&mut self, event: ShellEvent) -> Option<ComputerMove> {
        match event {
            ShellEvent::ComputerMoveDue { generation } => {
                if generation != self.generation {
                    debug!(stale = generation, "Discarding computer move from an earlier game");
                    return None;
                }
                self.pending = None;

                if self.game.phase() != Phase::ComputerTurn {
                    debug!(phase = ?self.game.phase(), "Computer move no longer expected");
                    return None;
                }

                match self.game.apply_computer_move() {
                    Ok(reply) => Some(reply),
                    Err(e) => {
                        warn!(error = %e, "Computer move rejected");
                        None
                    }
                }
            }
        }
    }

    /// Status line for the current phase.
    pub fn status_text(&self) -> &'static str {
        status_text(self.game.phase())
    }
}

/// Status line shown under the board.
pub fn status_text(phase: Phase) -> &'static str {
    match phase {
        Phase::HumanTurn => "Your turn (X)",
        Phase::ComputerTurn => "Computer's turn (O)",
        Phase::GameOver(Outcome::HumanWins) => "Human (X) wins!",
        Phase::GameOver(Outcome::ComputerWins) => "Computer (O) wins!",
        Phase::GameOver(Outcome::Draw) => "It's a draw!",
    }
}
