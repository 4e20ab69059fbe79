//! Empty origin invariant: history starts from the empty board.

use super::Invariant;
use crate::{Board, TimeTravelGame};

/// Invariant: History[0] is the all-empty board.
pub struct EmptyOriginInvariant;

impl Invariant<TimeTravelGame> for EmptyOriginInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_new_game() {
        assert!(EmptyOriginInvariant::holds(&TimeTravelGame::new()));
    }

    #[test]
    fn test_holds_after_branching_from_start() {
        let mut game = TimeTravelGame::new();
        game.apply_move(4);
        game.jump_to(0).unwrap();
        game.apply_move(0);
        assert!(EmptyOriginInvariant::holds(&game));
    }
}
