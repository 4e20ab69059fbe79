//! Single-step invariant: consecutive snapshots differ by one legal mark.

use super::Invariant;
use crate::{Player, TimeTravelGame, rules};

/// Invariant: every snapshot after the first adds exactly one mark.
///
/// The added mark belongs to the player whose turn it was, and the
/// previous snapshot had no winner.
pub struct SingleStepHistoryInvariant;

impl Invariant<TimeTravelGame> for SingleStepHistoryInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let history = game.history();
        (1..history.len()).all(|i| {
            let prev_open = history
                .get(i - 1)
                .is_some_and(|prev| rules::calculate_winner(prev).is_none());
            let legal_mark = history
                .move_at(i)
                .is_some_and(|mv| mv.player == Player::turn_for(i - 1));
            prev_open && legal_mark
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_holds_for_played_game() {
        let mut game = TimeTravelGame::new();
        for idx in [4, 0, 8, 2, 6] {
            game.apply_move(idx);
        }
        assert!(SingleStepHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_detects_wrong_player() {
        let mut game = TimeTravelGame::new();
        game.history
            .branch_from(0, Board::new().with_mark(Position::Center, Player::O));
        game.current_move = 1;
        assert!(!SingleStepHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_detects_double_mark() {
        let mut game = TimeTravelGame::new();
        let doubled = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::X);
        game.history.branch_from(0, doubled);
        game.current_move = 1;
        assert!(!SingleStepHistoryInvariant::holds(&game));
    }
}
