//! Computer move selection.
//!
//! The computer follows a fixed priority cascade and stops at the first
//! rule that produces a cell:
//!
//! 1. take the center if it is free
//! 2. complete one of its own two-in-a-rows
//! 3. block one of the human's two-in-a-rows
//! 4. pick any free cell uniformly at random
//!
//! Offense and defense scan [`WINNING_LINES`] in the same fixed order, so
//! the choice among simultaneous threats is deterministic. Only the
//! fallback consumes randomness.

use super::error::NoMoveAvailableError;
use super::rules::{WINNING_LINES, find_at_risk_cell};
use super::{Board, Marker, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the cascade produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Rule {
    /// The center was free.
    Center,
    /// The move completes a computer line.
    Offense,
    /// The move blocks a human line.
    Defense,
    /// No heuristic applied; random free cell.
    Random,
}

/// A selected move and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell to mark.
    pub position: Position,
    /// Rule that fired.
    pub rule: Rule,
}

/// First cell, in line order, that completes a two-in-a-row of `marker`.
fn first_at_risk_cell(board: &Board, marker: Marker) -> Option<Position> {
    WINNING_LINES
        .iter()
        .find_map(|line| find_at_risk_cell(line, board, marker))
}

/// Chooses the computer's next move and reports which rule fired.
///
/// Fails when the board has no empty cell.
#[instrument(skip(board, rng))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Decision, NoMoveAvailableError> {
    if board.is_full() {
        return Err(NoMoveAvailableError::new());
    }

    let decision = if board.is_empty(Position::Center) {
        Decision {
            position: Position::Center,
            rule: Rule::Center,
        }
    } else if let Some(position) = first_at_risk_cell(board, Marker::Computer) {
        Decision {
            position,
            rule: Rule::Offense,
        }
    } else if let Some(position) = first_at_risk_cell(board, Marker::Human) {
        Decision {
            position,
            rule: Rule::Defense,
        }
    } else {
        let unused = board.unused_cells();
        let position = *unused.choose(rng).ok_or_else(NoMoveAvailableError::new)?;
        Decision {
            position,
            rule: Rule::Random,
        }
    };

    debug!(cell = decision.position.cell(), rule = %decision.rule, "Computer chose move");
    Ok(decision)
}

/// Chooses the computer's next cell.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Position, NoMoveAvailableError> {
    decide(board, rng).map(|decision| decision.position)
}
