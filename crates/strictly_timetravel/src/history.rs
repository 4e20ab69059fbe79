//! Board snapshot history.

use super::action::Move;
use super::{Board, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ordered board snapshots, indexed by move number.
///
/// Entry 0 is always the empty board and the sequence is never empty.
/// Entries are only ever appended, or dropped from the end when play
/// resumes from an earlier snapshot.
///
/// Only the game may append; outside the crate a history is read-only:
///
/// ```compile_fail
/// use strictly_timetravel::{Board, History};
///
/// let mut history = History::new();
/// history.branch_from(0, Board::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots (moves played + 1).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Snapshot after `move_index` moves.
    pub fn get(&self, move_index: usize) -> Option<&Board> {
        self.boards.get(move_index)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Board {
        // Never empty: constructed with one board, truncation keeps at least one.
        &self.boards[self.boards.len() - 1]
    }

    /// Iterates snapshots from game start.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }

    /// All snapshots as a slice.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Drops every snapshot after `current`, then appends `next`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, next), fields(len = self.boards.len()))]
    pub(crate) fn branch_from(&mut self, current: usize, next: Board) -> usize {
        self.boards.truncate(current + 1);
        self.boards.push(next);
        self.boards.len() - 1
    }

    /// The move that produced snapshot `move_index`.
    ///
    /// `None` for index 0, out-of-range indices, or a pair of snapshots
    /// that do not differ by exactly one newly placed mark.
    pub fn move_at(&self, move_index: usize) -> Option<Move> {
        let prev = self.boards.get(move_index.checked_sub(1)?)?;
        let next = self.boards.get(move_index)?;

        let mut changed = Position::ALL
            .iter()
            .copied()
            .filter(|pos| prev.get(*pos) != next.get(*pos));
        let position = changed.next()?;
        if changed.next().is_some() || prev.get(position) != Square::Empty {
            return None;
        }
        next.get(position).player().map(|player| Move::new(player, position))
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.boards
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = String;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        match boards.first() {
            None => Err("history must contain the starting board".to_string()),
            Some(first) if *first != Board::new() => {
                Err("history must start from the empty board".to_string())
            }
            Some(_) => Ok(Self { boards }),
        }
    }
}
