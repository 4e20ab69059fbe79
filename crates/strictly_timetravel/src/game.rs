//! Game state manager: move history plus a cursor into it.

use super::action::{HistoryError, Move, MoveError};
use super::contracts::LegalMove;
use super::history::History;
use super::status::{GameStatus, MoveEntry};
use super::{Board, Player, Position, rules};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe with time travel.
///
/// Owns every board snapshot since game start and the index of the one
/// currently displayed. Jumping only moves the cursor; playing from an
/// earlier snapshot discards the snapshots after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeTravelGame {
    pub(crate) history: History,
    pub(crate) current_move: usize,
}

impl TimeTravelGame {
    /// Creates a game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
        }
    }

    /// Places the current player's mark at `index`, ignoring illegal requests.
    ///
    /// Nothing changes if the displayed board already has a winner, the
    /// square is taken, or `index` is not 0-8.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(e) = self.try_apply_move(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// On success the history is cut back to the displayed snapshot, the
    /// new snapshot is appended, and the cursor moves to it.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was refused; state is unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.turn()))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<Position, MoveError> {
        let position = LegalMove::check(self, index)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.turn();
        let next = self.current_board().with_mark(position, player);
        let dropped = self.history.len() - (self.current_move + 1);
        self.current_move = self.history.branch_from(self.current_move, next);

        #[cfg(debug_assertions)]
        {
            use super::contracts::{Contract, MoveContract};
            if let Err(e) = MoveContract::post(&before, self) {
                *self = before;
                return Err(e);
            }
        }

        info!(%position, %player, move_index = self.current_move, dropped, "Move applied");
        Ok(position)
    }

    /// Displays the snapshot after `move_index` moves.
    ///
    /// History is never modified.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::OutOfRange` if no such snapshot exists; the
    /// cursor stays where it was.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        if move_index >= self.history.len() {
            debug!("Jump ignored");
            return Err(HistoryError::OutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        info!(move_index, "Jumped");
        Ok(())
    }

    /// Starts over from the empty board, discarding all history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of snapshots in history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        // Cursor is kept in bounds by every mutating operation.
        &self.history.boards()[self.current_move]
    }

    /// Player to move from the displayed snapshot.
    pub fn turn(&self) -> Player {
        Player::turn_for(self.current_move)
    }

    /// Winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::calculate_winner(self.current_board())
    }

    /// Status of the displayed board, derived on each call.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match rules::calculate_winner(board) {
            Some(winner) => GameStatus::Won(winner),
            None if rules::is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress { next: self.turn() },
        }
    }

    /// Squares the current player may take.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// The move that produced snapshot `move_index`.
    pub fn move_at(&self, move_index: usize) -> Option<Move> {
        self.history.move_at(move_index)
    }

    /// One entry per snapshot, for a move list.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|move_index| MoveEntry {
                move_index,
                is_current: move_index == self.current_move,
            })
            .collect()
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}
