//! Win detection for tic-tac-toe.

use crate::game::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
///
/// Checked in this fixed order; the first completed line wins. In a legal
/// game only one player can hold three in a row, so the order never changes
/// the outcome, but keeping it deterministic pins down which line gets
/// reported when one mark completes two lines at once.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning mark and the three positions that form it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new,
)]
pub struct Win {
    /// The mark with three in a row.
    mark: Player,
    /// The positions of the completed line, for highlighting.
    line: [Position; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the winning mark and the exact line, or `None`. Pure; safe to
/// call on every render.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == board.get(a)
            && board.get(c) == board.get(a)
        {
            return Some(Win::new(mark, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_each_line_wins_and_cites_itself() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::O));
            }
            let win = check_winner(&board).expect("three in a row");
            assert_eq!(*win.mark(), Player::O);
            assert_eq!(*win.line(), line);
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::BottomRight, Square::Occupied(Player::X));
        let win = check_winner(&board).expect("diagonal win");
        assert_eq!(*win.mark(), Player::X);
        assert_eq!(
            *win.line(),
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_marks_do_not_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_matching_line_reported() {
        // X completes both the top row and the left column through TopLeft.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        let win = check_winner(&board).expect("win");
        // Rows come before columns in the fixed order.
        assert_eq!(
            *win.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
