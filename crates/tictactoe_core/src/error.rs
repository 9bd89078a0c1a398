//! Error types for board mutation and move selection.

use super::{Marker, Position};
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a mark could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveKind {
    /// The target cell already holds a marker.
    #[display("cell {_0} is already occupied by {_1}")]
    Occupied(Position, Marker),
    /// The cell number is not in 1-9.
    #[display("cell {_0} is out of range (must be 1-9)")]
    OutOfRange(usize),
}

/// A mark was attempted on an occupied or nonexistent cell.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid move: {} at {}:{}", kind, file, line)]
pub struct InvalidMoveError {
    /// What was wrong with the move.
    pub kind: InvalidMoveKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidMoveError {
    /// Creates a new invalid move error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// The computer was asked to move on a full board.
#[derive(Debug, Clone, Display, Error)]
#[display("No move available: board is full at {}:{}", file, line)]
pub struct NoMoveAvailableError {
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NoMoveAvailableError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new() -> Self {
        let loc = std::panic::Location::caller();
        Self {
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl Default for NoMoveAvailableError {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

/// Board text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board parse error: {}", message)]
pub struct ParseBoardError {
    /// Error message.
    pub message: String,
}

impl ParseBoardError {
    /// Creates a new parse error.
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
