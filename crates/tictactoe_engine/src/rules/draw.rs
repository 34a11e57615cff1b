//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Returns true iff every cell is occupied.
///
/// A full board can still hold a winning line; callers must suppress the
/// draw when [`check_winner`](super::check_winner) finds one.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Cell::{Empty, O, X};

    fn is_draw(board: &Board) -> bool {
        check_draw(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, Empty]]);
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(check_draw(&board));
        assert!(!is_draw(&board));
    }
}
