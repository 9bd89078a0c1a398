//! Win and threat detection for tic-tac-toe.

use super::super::{Board, Marker, Position, Square};
use super::lines::{Line, WINNING_LINES};
use tracing::instrument;

/// Number of cells on `line` currently holding `marker` (0-3).
pub fn count_markers_on_line(line: &Line, board: &Board, marker: Marker) -> u8 {
    line.iter()
        .filter(|&&pos| board.get(pos) == Square::Occupied(marker))
        .count() as u8
}

/// Returns the empty cell of `line` when the other two hold `marker`.
///
/// Passing your own marker finds a winning cell; passing the opponent's
/// finds the cell that must be blocked.
pub fn find_at_risk_cell(line: &Line, board: &Board, marker: Marker) -> Option<Position> {
    if count_markers_on_line(line, board, marker) != 2 {
        return None;
    }
    line.iter().copied().find(|&pos| board.is_empty(pos))
}

/// True when all three cells of `line` hold `marker`.
pub fn is_winning_line(line: &Line, board: &Board, marker: Marker) -> bool {
    count_markers_on_line(line, board, marker) == 3
}

/// True when `marker` holds any complete line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, marker: Marker) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| is_winning_line(line, board, marker))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if a marker has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Marker> {
    [Marker::Human, Marker::Computer]
        .into_iter()
        .find(|&marker| has_won(board, marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!has_won(&board, Marker::Human));
        assert!(!has_won(&board, Marker::Computer));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board("XXX ... ...");
        assert!(has_won(&board, Marker::Human));
        assert!(!has_won(&board, Marker::Computer));
        assert_eq!(winner(&board), Some(Marker::Human));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board("X.O .OX OX.");
        assert!(has_won(&board, Marker::Computer));
        assert!(is_winning_line(&WINNING_LINES[7], &board, Marker::Computer));
        assert!(!is_winning_line(&WINNING_LINES[6], &board, Marker::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board("XX. ... ...");
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_count_markers_on_line() {
        let board = board("XOX .X. O..");
        assert_eq!(count_markers_on_line(&WINNING_LINES[0], &board, Marker::Human), 2);
        assert_eq!(count_markers_on_line(&WINNING_LINES[0], &board, Marker::Computer), 1);
        assert_eq!(count_markers_on_line(&WINNING_LINES[6], &board, Marker::Human), 2);
        assert_eq!(count_markers_on_line(&WINNING_LINES[5], &board, Marker::Computer), 0);
    }

    #[test]
    fn test_at_risk_cell_found_for_two_in_a_row() {
        let board = board(".XX ... ...");
        assert_eq!(
            find_at_risk_cell(&WINNING_LINES[0], &board, Marker::Human),
            Some(Position::TopLeft)
        );
        assert_eq!(
            find_at_risk_cell(&WINNING_LINES[0], &board, Marker::Computer),
            None
        );
    }

    #[test]
    fn test_at_risk_cell_none_when_line_blocked() {
        let board = board("XXO ... ...");
        assert_eq!(
            find_at_risk_cell(&WINNING_LINES[0], &board, Marker::Human),
            None
        );
    }

    #[test]
    fn test_at_risk_cell_none_for_single_marker() {
        let board = board("X.. ... ...");
        assert_eq!(
            find_at_risk_cell(&WINNING_LINES[0], &board, Marker::Human),
            None
        );
    }

    #[test]
    fn test_at_risk_cell_none_for_complete_line() {
        let board = board("XXX ... ...");
        assert_eq!(
            find_at_risk_cell(&WINNING_LINES[0], &board, Marker::Human),
            None
        );
    }
}
