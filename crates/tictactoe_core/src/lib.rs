//! Tic-tac-toe game logic.
//!
//! Pure board state, win and threat detection over the eight winning
//! lines, and the computer's move selection policy. No I/O happens here;
//! the terminal front end drives these types.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_core::{Board, Marker, Position, strategy};
//!
//! let mut board = Board::new();
//! board.mark(Position::TopLeft, Marker::Human)?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let reply = strategy::select_move(&board, &mut rng)?;
//! assert_eq!(reply, Position::Center);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
pub mod strategy;
mod types;

pub use error::{InvalidMoveError, InvalidMoveKind, NoMoveAvailableError, ParseBoardError};
pub use position::Position;
pub use strategy::{Decision, Rule, select_move};
pub use types::{Board, Marker, Outcome, Square};
