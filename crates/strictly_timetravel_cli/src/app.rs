//! Application state and key handling.

use crate::input::{digit_square, move_cursor};
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::widgets::ListState;
use std::path::Path;
use strictly_timetravel::{Position, TimeTravelGame};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor; Enter plays.
    Board,
    /// Arrow keys move the move list selection; Enter jumps.
    Moves,
}

/// Main application state.
///
/// The game is the only source of truth; the list selection is re-synced
/// to the displayed move after every change.
#[derive(Debug, Getters)]
pub struct App {
    game: TimeTravelGame,
    cursor: Position,
    focus: Focus,
    move_list: ListState,
    show_move_list: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new(show_move_list: bool) -> Self {
        let mut move_list = ListState::default();
        move_list.select(Some(0));
        Self {
            game: TimeTravelGame::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            move_list,
            show_move_list,
            should_quit: false,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab if self.show_move_list => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        if let Some(index) = digit_square(code) {
            self.play(index);
            return;
        }
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            _ => {
                let moved = move_cursor(self.cursor, code);
                if moved == self.cursor {
                    debug!(?code, "Key ignored");
                }
                self.cursor = moved;
            }
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.move_list.select(Some(0)),
            KeyCode::End => self.move_list.select(Some(self.game.history_len() - 1)),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => debug!(?code, "Key ignored"),
        }
    }

    /// Places the current player's mark; illegal squares are ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        self.game.apply_move(index);
        if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }
        self.sync_selection();
    }

    /// Jumps to the move selected in the list.
    #[instrument(skip(self))]
    pub fn jump_to_selected(&mut self) {
        let Some(selected) = self.move_list.selected() else {
            return;
        };
        if let Err(e) = self.game.jump_to(selected) {
            debug!(error = %e, "Jump ignored");
        }
        self.sync_selection();
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.sync_selection();
    }

    /// Writes the game (history and current move) as JSON.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn write_history(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.game)?;
        std::fs::write(path.as_ref(), json)?;
        info!(moves = self.game.history_len() - 1, "History written");
        Ok(())
    }

    fn select_previous(&mut self) {
        let i = match self.move_list.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.game.history_len() - 1,
        };
        self.move_list.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.move_list.selected() {
            Some(i) => (i + 1) % self.game.history_len(),
            None => 0,
        };
        self.move_list.select(Some(i));
    }

    fn sync_selection(&mut self) {
        self.move_list.select(Some(self.game.current_move()));
    }
}
