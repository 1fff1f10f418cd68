//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{GameStatus, Player, Position, Square};

use super::app::{App, Focus};

/// Renders the whole view from current state.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + move list
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(34)])
        .split(chunks[1]);

    // Derived once per frame; the win detector is pure and cheap.
    let status = app.session().status();

    draw_board(frame, panes[0], app, &status);
    draw_moves(frame, panes[1], app);
    draw_status(frame, chunks[2], app, &status);
    draw_help(frame, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, status: &GameStatus) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, status, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, status, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, status, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, status: &GameStatus, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (chunk, offset) in [(0, 0), (2, 1), (4, 2)] {
        if let Some(pos) = Position::from_index(start + offset) {
            draw_cell(frame, cols[chunk], app, status, pos);
        }
    }
    draw_vertical_separator(frame, cols[1]);
    draw_vertical_separator(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, status: &GameStatus, pos: Position) {
    let (symbol, mut style) = match app.session().board().get(pos) {
        Square::Empty => (
            (pos.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if let GameStatus::Won(win) = status
        && win.line().contains(&pos)
    {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(symbol).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &mut App) {
    let current = app.session().current();
    let len = app.session().history().len();

    let items: Vec<ListItem> = (0..len)
        .map(|row| {
            let index = app.history_index(row);
            let record = &app.session().history()[index];
            let (text, style) = if index == current {
                (
                    format!("You are at move #{index}"),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )
            } else if let Some(pos) = record.placed() {
                (
                    format!("Go to move #{index} ({}, {})", pos.row(), pos.col()),
                    Style::default(),
                )
            } else {
                ("Go to game start".to_string(), Style::default())
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Moves ({})", app.session().sort()))
                .border_style(focus_style(app.focus() == Focus::Moves)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, app.list_state_mut());
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, status: &GameStatus) {
    let (text, style) = if let Some(notice) = app.notice() {
        (notice.to_string(), Style::default().fg(Color::Red))
    } else {
        let text = match status {
            GameStatus::Won(win) => format!("Winner: {}! Press 'r' for a new game.", win.mark()),
            GameStatus::Draw => "Draw! Press 'r' for a new game.".to_string(),
            GameStatus::NextTurn(player) => format!("Next player: {}", player),
        };
        (text, Style::default().fg(Color::Yellow))
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "↑↓←→: Move | Enter: Place/Jump | Tab: Focus | 1-9: Place | s: Sort | r: Restart | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
