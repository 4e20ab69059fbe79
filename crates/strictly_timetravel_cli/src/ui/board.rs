//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use strictly_timetravel::{Board, Player, Position, Square, winning_line};

/// Width of the drawn board in cells.
pub const BOARD_WIDTH: u16 = 38;
/// Height of the drawn board in cells.
pub const BOARD_HEIGHT: u16 = 11;

/// Renders the board centered in `area`.
///
/// `cursor` is highlighted when present; a completed line is drawn in green.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
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

    let line = winning_line(board);
    render_row(f, rows[0], board, cursor, line, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, cursor, line, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, cursor, line, 6);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    line: Option<[Position; 3]>,
    start: usize,
) {
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

    for (col, slot) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(start + col) {
            let highlight = line.is_some_and(|l| l.contains(&pos));
            render_square(f, cols[slot], board.get(pos), pos, cursor == Some(pos), highlight);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    selected: bool,
    winning: bool,
) {
    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
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
    if winning {
        style = style.fg(Color::Green);
    }
    if selected {
        style = style.bg(Color::White).fg(Color::Black);
    }
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
