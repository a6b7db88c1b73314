//! Application state and logic.

use noughts_core::Position;
use tracing::{debug, info};

use super::input::{Action, move_cursor};
use super::ui::BoardHitMap;
use crate::session::{Session, ShellEvent};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    hit_map: BoardHitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            hit_map: BoardHitMap::default(),
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the game session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Cell rectangles from the last draw.
    pub fn hit_map(&self) -> &BoardHitMap {
        &self.hit_map
    }

    /// Stores the cell rectangles from a draw.
    pub fn set_hit_map(&mut self, hit_map: BoardHitMap) {
        self.hit_map = hit_map;
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                // Rejected clicks are ignored; the session already logged them.
                let _ = self.session.click(pos);
            }
            Action::PlaceAtCursor => {
                let _ = self.session.click(self.cursor);
            }
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
            }
            Action::Reset => {
                self.session.reset();
                self.cursor = Position::Center;
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Applies an event from a background task.
    pub fn handle_event(&mut self, event: ShellEvent) {
        if let Some(reply) = self.session.handle(event) {
            debug!(position = %reply.position(), tier = %reply.tier(), "Computer moved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use noughts_core::Phase;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::UnboundedReceiver<ShellEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(Session::new(Duration::from_millis(500), tx)), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_then_computer_replies() {
        let (mut app, mut rx) = app();

        app.apply(Action::Place(Position::Center));
        assert_eq!(app.session().game().phase(), Phase::ComputerTurn);

        let event = rx.recv().await.expect("Computer move scheduled");
        app.handle_event(event);
        assert_eq!(app.session().game().phase(), Phase::HumanTurn);
        assert!(!app.session().game().board().is_empty(Position::TopLeft));
    }

    #[tokio::test]
    async fn test_cursor_placement() {
        let (mut app, _rx) = app();

        app.apply(Action::MoveCursor(KeyCode::Up));
        app.apply(Action::MoveCursor(KeyCode::Left));
        assert_eq!(app.cursor(), Position::TopLeft);

        app.apply(Action::PlaceAtCursor);
        assert!(!app.session().game().board().is_empty(Position::TopLeft));
    }

    #[tokio::test]
    async fn test_reset_and_quit() {
        let (mut app, _rx) = app();

        app.apply(Action::Place(Position::BottomRight));
        app.apply(Action::Reset);
        assert_eq!(app.session().game().history().len(), 0);
        assert_eq!(app.cursor(), Position::Center);
        assert!(!app.should_quit());

        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
