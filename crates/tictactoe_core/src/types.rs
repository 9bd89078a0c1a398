//! Core domain types for tic-tac-toe.

use super::error::{InvalidMoveError, InvalidMoveKind, ParseBoardError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Who owns a marker on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Marker {
    /// The human player, shown as `X`.
    Human,
    /// The computer opponent, shown as `O`.
    Computer,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::Human => Marker::Computer,
            Marker::Computer => Marker::Human,
        }
    }

    /// Symbol drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Marker::Human => 'X',
            Marker::Computer => 'O',
        }
    }

    /// Reads a marker symbol (case-insensitive).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Marker::iter().find(|marker| marker.symbol() == symbol.to_ascii_uppercase())
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the occupying marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Someone completed a line.
    Winner(Marker),
    /// The board filled up with no line completed.
    Draw,
}

/// 3x3 tic-tac-toe board.
///
/// Squares only ever go from empty to occupied; there is no way to
/// clear or overwrite a mark once placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending order, computed from the current squares.
    pub fn unused_cells(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        self.unused_cells().is_empty()
    }

    /// Places `marker` on an empty square.
    ///
    /// The board is left untouched when the square is already taken.
    #[instrument(skip(self))]
    pub fn mark(&mut self, pos: Position, marker: Marker) -> Result<(), InvalidMoveError> {
        if let Square::Occupied(owner) = self.get(pos) {
            return Err(InvalidMoveError::new(InvalidMoveKind::Occupied(pos, owner)));
        }
        self.squares[pos.to_index()] = Square::Occupied(marker);
        debug!(cell = pos.cell(), %marker, "Square marked");
        Ok(())
    }

    /// Places `marker` on the square numbered `cell` (1-9).
    #[instrument(skip(self))]
    pub fn mark_cell(&mut self, cell: usize, marker: Marker) -> Result<(), InvalidMoveError> {
        let pos = Position::from_cell(cell)
            .ok_or_else(|| InvalidMoveError::new(InvalidMoveKind::OutOfRange(cell)))?;
        self.mark(pos, marker)
    }

    /// Returns the outcome if the round is over.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = super::rules::winner(self) {
            Some(Outcome::Winner(winner))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let symbol =
            |row: usize, col: usize| self.squares[row * 3 + col].marker().map_or(' ', Marker::symbol);
        let mut result = String::new();
        for row in 0..3 {
            result.push_str("     |     |\n");
            result.push_str(&format!(
                "  {}  |  {}  |  {}\n",
                symbol(row, 0),
                symbol(row, 1),
                symbol(row, 2)
            ));
            result.push_str("     |     |\n");
            if row < 2 {
                result.push_str("-----+-----+-----\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine symbols: `X`, `O`, or `.`/`_`/`-` for empty.
    /// Whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if symbols.len() != 9 {
            return Err(ParseBoardError::new(format!(
                "expected 9 cells, found {}",
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for (pos, symbol) in Position::iter().zip(symbols) {
            match symbol {
                '.' | '_' | '-' => {}
                other => {
                    let marker = Marker::from_symbol(other).ok_or_else(|| {
                        ParseBoardError::new(format!("unknown symbol '{}' in cell {}", other, pos))
                    })?;
                    board.squares[pos.to_index()] = Square::Occupied(marker);
                }
            }
        }
        Ok(board)
    }
}
