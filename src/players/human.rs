//! Human player that types square numbers.

use super::Player;
use crate::console::{Terminal, join_or};
use anyhow::Result;
use tictactoe_core::{Board, Marker, Position};
use tracing::{debug, instrument};

/// Human player using line input.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, terminal: &mut dyn Terminal) -> Result<Position> {
        loop {
            let choices: Vec<String> = board
                .unused_cells()
                .iter()
                .map(ToString::to_string)
                .collect();
            let answer =
                terminal.ask(&format!("Choose a square ({}):", join_or(&choices, ", ", "or")))?;

            match Position::parse_cell(&answer) {
                Some(position) if board.is_empty(position) => {
                    debug!(cell = position.cell(), "Human chose square");
                    return Ok(position);
                }
                _ => {
                    debug!(%answer, "Rejected square choice");
                    terminal.say("Sorry, that's not a valid choice.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn marker(&self) -> Marker {
        Marker::Human
    }
}
