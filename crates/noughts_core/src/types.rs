//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// The person at the keyboard. Plays X and always moves first.
    Human,
    /// The heuristic opponent. Plays O.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// The mark this player writes on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Player::Human),
            'O' | 'o' => Some(Player::Computer),
            _ => None,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    Empty,
    /// Holds a player's mark.
    Marked(Player),
}

impl Cell {
    /// The character drawn for this cell, space when empty.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Writes a cell. Only the turn controller and engine probes mutate boards.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at `pos` holds no mark.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks a zero-based row/column for an empty cell.
    ///
    /// Coordinates outside the grid are never empty, so a move there is
    /// never legal.
    #[instrument(skip(self))]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        Position::from_row_col(row, col).is_some_and(|pos| self.is_empty(pos))
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Marked(player))
            .count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.cells[row * 3 + col].symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` are marks; `_`, `.` and a space inside a row are empty cells.
    /// `/`, `|`, `-`, `+` and line breaks separate rows and columns.
    /// Accepts both `"XX_/OO_/___"` and the output of `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for line in s.split(['/', '\n']) {
            let line = line.trim_end_matches('\r');
            if line.chars().all(|c| matches!(c, '-' | '+')) {
                continue;
            }
            for c in line.chars() {
                match c {
                    '|' => {}
                    '_' | '.' | ' ' => cells.push(Cell::Empty),
                    c => match Player::from_symbol(c) {
                        Some(player) => cells.push(Cell::Marked(player)),
                        None => return Err(BoardParseError::UnexpectedChar(c)),
                    },
                }
            }
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Cell>| BoardParseError::WrongCellCount(cells.len()))?;
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().count(), 9);
        assert_eq!(board.count(Player::Human), 0);
        assert_eq!(board.count(Player::Computer), 0);
    }

    #[test]
    fn test_is_empty_at_rejects_out_of_range() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Marked(Player::Human));
        assert!(!board.is_empty_at(1, 1));
        assert!(board.is_empty_at(0, 0));
        assert!(!board.is_empty_at(3, 0));
        assert!(!board.is_empty_at(0, 7));
    }

    #[test]
    fn test_parse_compact_form() {
        let board: Board = "XX_/OO_/___".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Marked(Player::Human));
        assert_eq!(board.get(Position::TopCenter), Cell::Marked(Player::Human));
        assert_eq!(board.get(Position::MiddleLeft), Cell::Marked(Player::Computer));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.empty_positions().count(), 5);
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let text = board.to_string();
        assert_eq!(text, "X| |O\n-+-+-\n |X| \n-+-+-\nO| | ");
        assert_eq!(text.parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XX?/OO_/___".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('?'))
        );
        assert_eq!(
            "XX/OO_/___".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(8))
        );
    }
}
