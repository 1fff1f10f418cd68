//! Typed board positions.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A position on the tic-tac-toe board.
///
/// Positions index the board in row-major order, 0-8. Keeping them as an
/// enum rules out out-of-range indices at the type level; only the history
/// pointer stays a raw `usize`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0).
    TopLeft,
    /// Top-center (index 1).
    TopCenter,
    /// Top-right (index 2).
    TopRight,
    /// Middle-left (index 3).
    MiddleLeft,
    /// Center (index 4).
    Center,
    /// Middle-right (index 5).
    MiddleRight,
    /// Bottom-left (index 6).
    BottomLeft,
    /// Bottom-center (index 7).
    BottomCenter,
    /// Bottom-right (index 8).
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index (0-8) in row-major order.
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// 1-indexed row, for move-list coordinates.
    pub fn row(self) -> usize {
        self.index() / 3 + 1
    }

    /// 1-indexed column, for move-list coordinates.
    pub fn col(self) -> usize {
        self.index() % 3 + 1
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_col_are_one_indexed() {
        assert_eq!((Position::TopLeft.row(), Position::TopLeft.col()), (1, 1));
        assert_eq!((Position::Center.row(), Position::Center.col()), (2, 2));
        assert_eq!(
            (Position::BottomRight.row(), Position::BottomRight.col()),
            (3, 3)
        );
        assert_eq!(
            (Position::MiddleRight.row(), Position::MiddleRight.col()),
            (2, 3)
        );
    }
}
