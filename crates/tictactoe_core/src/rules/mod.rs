//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Nothing here mutates a board; the move selector and the match loop
//! build on these queries.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{Line, WINNING_LINES};
pub use win::{count_markers_on_line, find_at_risk_cell, has_won, is_winning_line, winner};
