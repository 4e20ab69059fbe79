//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strictly_timetravel::{MoveEntry, TimeTravelGame};

/// Text for one move list row, e.g. `Go to move #2 (O -> Top-left)`.
pub fn entry_text(game: &TimeTravelGame, entry: &MoveEntry) -> String {
    match game.move_at(entry.move_index) {
        Some(mv) => format!("{} ({})", entry.label(), mv),
        None => entry.label(),
    }
}

/// Renders the move list; the displayed move is bold, the selection marked `> `.
pub fn render_moves(
    f: &mut Frame,
    area: Rect,
    game: &TimeTravelGame,
    state: &ListState,
    focused: bool,
) {
    let items: Vec<ListItem> = game
        .move_entries()
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry_text(game, entry)).style(style)
        })
        .collect();

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!("Moves ({}/{})", game.current_move(), game.history_len() - 1)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = *state;
    f.render_stateful_widget(list, area, &mut state);
}
