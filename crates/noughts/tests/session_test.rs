//! Tests for the deferred computer move and game generations.

use noughts::{Session, ShellEvent};
use noughts_core::{GameState, Outcome, Phase, Position};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError};

const DELAY: Duration = Duration::from_millis(500);

fn session() -> (Session, mpsc::UnboundedReceiver<ShellEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Session::new(DELAY, tx), rx)
}

#[tokio::test(start_paused = true)]
async fn test_computer_reply_waits_for_delay() {
    let (mut session, mut rx) = session();

    assert_eq!(session.click(Position::Center), Ok(Phase::ComputerTurn));
    assert!(session.is_computer_pending());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    assert_eq!(session.game().phase(), Phase::ComputerTurn);

    let event = rx.recv().await.expect("Reply delivered");
    assert_eq!(event, ShellEvent::ComputerMoveDue { generation: 0 });

    let reply = session.handle(event).expect("Computer moved");
    assert_eq!(reply.position(), &Position::TopLeft);
    assert_eq!(session.game().phase(), Phase::HumanTurn);
    assert!(!session.is_computer_pending());
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_reply() {
    let (mut session, mut rx) = session();

    session.click(Position::Center).expect("Valid move");
    session.reset();
    assert!(!session.is_computer_pending());

    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    assert_eq!(session.game(), &GameState::new());
    assert_eq!(session.generation(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stale_reply_never_lands_on_new_game() {
    let (mut session, mut rx) = session();

    session.click(Position::Center).expect("Valid move");
    session.reset();
    session.click(Position::TopLeft).expect("Valid move");

    // A due event from the first game arrives late.
    let stale = ShellEvent::ComputerMoveDue { generation: 0 };
    assert_eq!(session.handle(stale), None);
    assert_eq!(session.game().history().len(), 1);
    assert_eq!(session.game().phase(), Phase::ComputerTurn);

    let event = rx.recv().await.expect("Reply delivered");
    assert_eq!(event, ShellEvent::ComputerMoveDue { generation: 1 });
    let reply = session.handle(event).expect("Computer moved");
    assert_eq!(reply.position(), &Position::Center);
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_due_event_is_ignored() {
    let (mut session, mut rx) = session();

    session.click(Position::Center).expect("Valid move");
    let event = rx.recv().await.expect("Reply delivered");
    assert!(session.handle(event).is_some());

    // Same generation, but the computer has already moved.
    assert_eq!(session.handle(event), None);
    assert_eq!(session.game().history().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_full_game_through_session() {
    let (mut session, mut rx) = session();

    for pos in [Position::TopLeft, Position::BottomRight, Position::BottomLeft] {
        assert_eq!(session.click(pos), Ok(Phase::ComputerTurn));
        let event = rx.recv().await.expect("Reply delivered");
        session.handle(event).expect("Computer moved");
    }

    assert_eq!(
        session.click(Position::BottomCenter),
        Ok(Phase::GameOver(Outcome::HumanWins))
    );
    assert!(!session.is_computer_pending());
    assert_eq!(session.status_text(), "Human (X) wins!");

    // Clicks after the end are ignored.
    assert!(session.click(Position::TopCenter).is_err());
    assert_eq!(session.game().history().len(), 7);

    session.reset();
    assert_eq!(session.status_text(), "Your turn (X)");
}

#[tokio::test]
async fn test_reply_after_session_dropped_is_harmless() {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut session = Session::new(Duration::ZERO, tx);
    drop(rx);

    session.click(Position::Center).expect("Valid move");
    tokio::task::yield_now().await;
    assert_eq!(session.game().phase(), Phase::ComputerTurn);
}
