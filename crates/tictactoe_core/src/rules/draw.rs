//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// True when the board is full and nobody holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Marker, Outcome, Position};
    use super::super::win::has_won;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.mark(Position::Center, Marker::Human).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_alternating_fill_without_winner_is_draw() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        let moves = [
            (1, Marker::Human),
            (2, Marker::Computer),
            (3, Marker::Human),
            (5, Marker::Computer),
            (4, Marker::Human),
            (6, Marker::Computer),
            (8, Marker::Human),
            (7, Marker::Computer),
            (9, Marker::Human),
        ];
        for (cell, marker) in moves {
            board.mark_cell(cell, marker).unwrap();
        }

        assert!(is_full(&board));
        assert!(!has_won(&board, Marker::Human));
        assert!(!has_won(&board, Marker::Computer));
        assert!(is_draw(&board));
        assert_eq!(board.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
        assert_eq!(board.outcome(), Some(Outcome::Winner(Marker::Human)));
    }
}
