//! Application state and key handling.

use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use rewind_tictactoe::{GameSession, GameStatus, Position, SortOrder};
use tracing::{debug, info};

use super::input;

/// Which pane receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move list.
    Moves,
}

/// Main application state.
///
/// Owns the session explicitly; every key press runs one transition and the
/// next draw recomputes the whole view from current state.
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    list_state: ListState,
    notice: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(descending: bool) -> Self {
        let mut session = GameSession::new();
        if descending {
            session.toggle_sort();
        }
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            list_state,
            notice: None,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Transient hint shown after a rejected move.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Move-list selection state, for stateful rendering.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Maps a move-list display row to its history index.
    ///
    /// Ascending order is the identity; descending reverses. The mapping is
    /// its own inverse, so it also maps a history index to its display row.
    pub fn history_index(&self, row: usize) -> usize {
        let last = self.session.history().len() - 1;
        match self.session.sort() {
            SortOrder::Ascending => row.min(last),
            SortOrder::Descending => last - row.min(last),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                debug!(focus = ?self.focus, "Focus switched");
                self.sync_selection();
            }
            KeyCode::Char('s') => {
                self.session.toggle_sort();
                self.sync_selection();
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            code => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, code),
                Focus::Moves => self.move_selection(code),
            },
        }
    }

    /// Enter/Space: place on the board or jump in the move list.
    fn activate(&mut self) {
        match self.focus {
            Focus::Board => self.play(self.cursor),
            Focus::Moves => {
                if let Some(row) = self.list_state.selected() {
                    let index = self.history_index(row);
                    self.session.jump_to(index);
                    self.notice = None;
                    info!(index, "Jumped to move");
                }
            }
        }
    }

    /// Routes a move into the session; rejected moves only set a hint.
    fn play(&mut self, pos: Position) {
        if self.session.attempt_move(pos) {
            self.notice = None;
            self.sync_selection();
            if !matches!(self.session.status(), GameStatus::NextTurn(_)) {
                info!(board = %self.session.board().display(), "Game over");
            }
        } else {
            self.notice = Some(match self.session.status() {
                GameStatus::Won(_) => {
                    "The game is decided. Jump back in the move list or press 'r'.".to_string()
                }
                _ => format!("{} is already taken.", pos.label()),
            });
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.session.history().len() - 1;
        let row = self.list_state.selected().unwrap_or(0).min(last);
        let row = match key {
            KeyCode::Up => row.saturating_sub(1),
            KeyCode::Down => (row + 1).min(last),
            _ => row,
        };
        self.list_state.select(Some(row));
    }

    /// Keeps the move-list selection on the current pointer.
    fn sync_selection(&mut self) {
        let row = self.history_index(self.session.current());
        self.list_state.select(Some(row));
    }

    /// Restarts the game, keeping the sort preference.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.cursor = Position::Center;
        self.notice = None;
        self.sync_selection();
    }
}
