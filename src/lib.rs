//! Rewind Tic-Tac-Toe library - game core with time travel
//!
//! # Architecture
//!
//! - **Game**: board types and pure rules (win and draw detection)
//! - **Session**: move history, the pointer into it, and derived status
//!
//! The terminal UI in the binary is a passive consumer: it reads session
//! state, renders, and routes key presses back into the session.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.attempt_move(Position::Center);
//! session.attempt_move(Position::TopLeft);
//!
//! // Rewind one move, then branch: the O move is discarded.
//! session.jump_to(1);
//! assert_eq!(session.to_move(), Player::O);
//! session.attempt_move(Position::BottomRight);
//! assert_eq!(session.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod session;

// Crate-level exports - Game types
pub use game::{Board, Player, Position, Square};

// Crate-level exports - Rules
pub use game::rules::{Win, check_winner, is_full};

// Crate-level exports - Session
pub use session::{GameSession, GameStatus, MoveRecord, SortOrder};
