//! Cursor invariant: the current move always names a snapshot.

use super::Invariant;
use crate::TimeTravelGame;

/// Invariant: 0 <= current_move < history length.
pub struct CursorInBoundsInvariant;

impl Invariant<TimeTravelGame> for CursorInBoundsInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.current_move() < game.history_len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing snapshot"
    }
}
