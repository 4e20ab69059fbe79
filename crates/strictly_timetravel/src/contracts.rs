//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}.

use super::action::MoveError;
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::{Position, TimeTravelGame, rules};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the index names a square.
pub struct InBounds;

impl InBounds {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: the displayed board has no winner.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with `GameOver` if a line is complete.
    #[instrument(skip(game))]
    pub fn check(game: &TimeTravelGame) -> Result<(), MoveError> {
        match rules::calculate_winner(game.current_board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square is empty on the displayed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `SquareOccupied` if the square holds a mark.
    #[instrument(skip(game))]
    pub fn check(game: &TimeTravelGame, position: Position) -> Result<(), MoveError> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Composite precondition for placing a mark at a board index.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the target position.
    ///
    /// A finished game reports `GameOver` even for an occupied square.
    #[instrument(skip(game))]
    pub fn check(game: &TimeTravelGame, index: usize) -> Result<Position, MoveError> {
        let position = InBounds::check(index)?;
        NoWinnerYet::check(game)?;
        SquareIsEmpty::check(game, position)?;
        Ok(position)
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Index names a square
/// - Displayed board has no winner
/// - Square is empty
///
/// Postconditions:
/// - Snapshots up to the old cursor are unchanged
/// - Exactly one snapshot follows them and the cursor points at it
/// - All game invariants hold
pub struct MoveContract;

impl Contract<TimeTravelGame, usize> for MoveContract {
    fn pre(game: &TimeTravelGame, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(game, *index).map(|_| ())
    }

    fn post(before: &TimeTravelGame, after: &TimeTravelGame) -> Result<(), MoveError> {
        let kept = before.current_move() + 1;
        let prefix_kept = after.history().boards().get(..kept)
            == before.history().boards().get(..kept);
        if !prefix_kept || after.history_len() != kept + 1 || after.current_move() != kept {
            warn!(
                before_len = before.history_len(),
                after_len = after.history_len(),
                after_cursor = after.current_move(),
                "Branch shape violated"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history did not branch from the current move".to_string(),
            ));
        }

        TimeTravelInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
