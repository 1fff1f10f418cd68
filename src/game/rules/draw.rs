//! Draw detection for tic-tac-toe.

use crate::game::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw; the session combines this with
/// [`super::check_winner`] when deriving status.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::game::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopRight,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        for pos in [
            Position::TopCenter,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            board.set(pos, Square::Occupied(Player::O));
        }

        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }
}
