//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Terminal;
use anyhow::Result;
use tictactoe_core::{Board, Marker, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned position is always empty on `board`.
    fn choose_move(&mut self, board: &Board, terminal: &mut dyn Terminal) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Marker this player places.
    fn marker(&self) -> Marker;
}
