//! Stateless UI rendering for the time-travel game.

mod board;
mod moves;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, render_board};
pub use moves::{entry_text, render_moves};

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_timetravel::GameStatus;

/// Width reserved for the move list panel.
const MOVES_WIDTH: u16 = 40;

/// Draws the whole screen: status, board, move list and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Status
            Constraint::Min(BOARD_HEIGHT),       // Board + moves
            Constraint::Length(3),               // Help
        ])
        .split(area);

    let game = app.game();
    let status = game.status();
    let status_style = match status {
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));
    frame.render_widget(status_text, chunks[0]);

    let board_focused = *app.focus() == Focus::Board;
    let cursor = board_focused.then_some(*app.cursor());
    if *app.show_move_list() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(MOVES_WIDTH)])
            .split(chunks[1]);
        render_board(frame, body[0], game.current_board(), cursor);
        render_moves(frame, body[1], game, app.move_list(), !board_focused);
    } else {
        render_board(frame, chunks[1], game.current_board(), cursor);
    }

    let help_text = match (app.focus(), *app.show_move_list()) {
        (Focus::Board, true) => "←↑↓→: Move | Enter/1-9: Play | Tab: Moves | r: Restart | q: Quit",
        (Focus::Board, false) => "←↑↓→: Move | Enter/1-9: Play | r: Restart | q: Quit",
        (Focus::Moves, _) => "↑↓: Select | Enter: Jump | Tab: Board | r: Restart | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}
