//! Computer opponent driven by the move selection cascade.

use super::Player;
use crate::console::Terminal;
use anyhow::Result;
use rand::Rng;
use tictactoe_core::{Board, Marker, Position, strategy};
use tracing::{info, instrument};

/// Computer player; randomness only feeds the fallback rule.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, terminal: &mut dyn Terminal) -> Result<Position> {
        let decision = strategy::decide(board, &mut self.rng)?;
        info!(cell = decision.position.cell(), rule = %decision.rule, "Computer move");
        terminal.say(&format!("{} chooses square {}.", self.name, decision.position))?;
        Ok(decision.position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn marker(&self) -> Marker {
        Marker::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    #[test]
    fn test_blocks_and_announces() {
        let board: Board = "XX. .O. ...".parse().unwrap();
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let mut computer = ComputerPlayer::new("Computer", StdRng::seed_from_u64(5));

        let position = computer.choose_move(&board, &mut console).unwrap();
        assert_eq!(position, Position::TopRight);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "=> Computer chooses square 3.\n");
    }

    #[test]
    fn test_full_board_is_error() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let mut computer = ComputerPlayer::new("Computer", StdRng::seed_from_u64(5));
        assert!(computer.choose_move(&board, &mut console).is_err());
    }
}
