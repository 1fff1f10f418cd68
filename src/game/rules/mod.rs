//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules are separated from
//! board storage so the session can re-derive status on every render.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Win, check_winner};
