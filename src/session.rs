//! Game session: move history, time travel, derived status.
//!
//! A [`GameSession`] owns the ordered history of board snapshots, the
//! pointer selecting the displayed snapshot, and the presentation-only sort
//! flag for the move list. Whose turn it is falls out of pointer parity and
//! is never stored; win/draw status is re-derived from the current snapshot
//! on demand.

use crate::game::rules::{Win, check_winner, is_full};
use crate::game::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry in the move history.
///
/// The first record is the empty board with no placement; every later record
/// is the snapshot a move produced, paired with the position it filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveRecord {
    /// Board snapshot after the move.
    board: Board,
    /// The square the move filled; `None` only for the initial record.
    placed: Option<Position>,
}

impl MoveRecord {
    /// The game-start record: empty board, nothing placed.
    fn initial() -> Self {
        Self::new(Board::new(), None)
    }
}

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    #[display("Ascending")]
    Ascending,
    /// Newest move first.
    #[display("Descending")]
    Descending,
}

/// Derived display status of the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; this mark moves next.
    NextTurn(Player),
    /// A line is complete.
    Won(Win),
    /// Board is full with no line.
    Draw,
}

/// A single game of tic-tac-toe with rewindable history.
///
/// Every accepted move appends a snapshot; jumping moves only the pointer.
/// Playing from a past position truncates the abandoned future before
/// appending, so history always reads as one straight line of play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    history: Vec<MoveRecord>,
    current: usize,
    sort: SortOrder,
}

impl GameSession {
    /// Creates a session at the start of a game.
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            current: 0,
            sort: SortOrder::default(),
        }
    }

    /// The snapshot the pointer selects.
    pub fn board(&self) -> &Board {
        &self.history[self.current].board
    }

    /// The full move history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Display order of the move list.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// The mark that moves next from the current snapshot.
    ///
    /// Pure function of the pointer: even means X, odd means O.
    pub fn to_move(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Derives the status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = check_winner(self.board()) {
            GameStatus::Won(win)
        } else if is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::NextTurn(self.to_move())
        }
    }

    /// Attempts a move at the given position.
    ///
    /// Rejected moves (occupied square, game already decided) change nothing
    /// and return `false`. An accepted move discards any history beyond the
    /// pointer, appends the new snapshot, and advances the pointer to it.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, pos: Position) -> bool {
        if check_winner(self.board()).is_some() {
            debug!("move rejected: game already decided");
            return false;
        }
        if !self.board().is_empty(pos) {
            debug!("move rejected: square occupied");
            return false;
        }

        let mark = self.to_move();
        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(mark));

        self.history.truncate(self.current + 1);
        self.history.push(MoveRecord::new(next, Some(pos)));
        self.current = self.history.len() - 1;

        debug!(mark = %mark, move_number = self.current, "Move accepted");
        true
    }

    /// Jumps the pointer to an existing history index.
    ///
    /// History is untouched; jumping to the current index is a no-op. The
    /// index must be in range: callers only ever offer indices taken from
    /// [`Self::history`], so an out-of-range value is a caller bug.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(index < self.history.len(), "history index out of range");
        debug!(from = self.current, to = index, "Jumping in history");
        self.current = index;
    }

    /// Flips the move-list display order. Touches nothing else.
    pub fn toggle_sort(&mut self) {
        self.sort = match self.sort {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        };
        debug!(sort = %self.sort, "Sort order toggled");
    }

    /// Starts a fresh game, keeping the sort preference.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting session");
        self.history = vec![MoveRecord::initial()];
        self.current = 0;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
