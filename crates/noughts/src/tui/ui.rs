//! Stateless UI rendering for the game window.

use noughts_core::{Cell, GameState, Player, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPoint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

/// Window title.
pub const TITLE: &str = "Tic-Tac-Toe (Human vs. AI)";

const HELP: &str = "1-9 / click / arrows+Enter: move | R: Reset Game | Q: Quit";

/// Screen rectangles of the nine cells as last drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardHitMap {
    cells: [Option<Rect>; 9],
}

impl BoardHitMap {
    /// Remembers where a cell was drawn.
    pub fn record(&mut self, pos: Position, area: Rect) {
        self.cells[pos.to_index()] = Some(area);
    }

    /// The cell under a terminal coordinate, if any.
    pub fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPoint::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].is_some_and(|area| area.contains(point)))
    }
}

/// Draws the whole window and returns where the cells ended up.
pub fn draw(frame: &mut Frame, app: &App) -> BoardHitMap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let hit_map = draw_board(frame, chunks[1], app.session().game(), app.cursor());

    let status = Paragraph::new(app.session().status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    hit_map
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameState, cursor: Position) -> BoardHitMap {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut hit_map = BoardHitMap::default();
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, row_area, game, cursor, row, &mut hit_map);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
    hit_map
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    game: &GameState,
    cursor: Position,
    row: usize,
    hit_map: &mut BoardHitMap,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cell_area, game, cursor, pos);
            hit_map.record(pos, cell_area);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, game: &GameState, cursor: Position, pos: Position) {
    let (symbol, mut style) = match game.board().get(pos) {
        Cell::Empty => (
            pos.key_number().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Player::Human) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Player::Computer) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Finished games are read-only.
    if game.is_over() {
        style = style.add_modifier(Modifier::DIM);
    } else if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad to the middle line of the 3-row cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
