//! Derived views over the game: status line and move list entries.
//!
//! Nothing here is stored; the state manager rebuilds these on every read.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner yet and squares remain.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// Some player completed a line.
    Won(Player),
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// True once no further moves are possible.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub move_index: usize,
    /// True if this is the displayed position.
    pub is_current: bool,
}

impl MoveEntry {
    /// Button text for this entry.
    pub fn label(&self) -> String {
        if self.move_index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.move_index)
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::InProgress { next: Player::O }.to_string(), "Next player: O");
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_entry_labels() {
        let start = MoveEntry { move_index: 0, is_current: true };
        let third = MoveEntry { move_index: 3, is_current: false };
        assert_eq!(start.label(), "Go to game start");
        assert_eq!(third.label(), "Go to move #3");
    }

    #[test]
    fn test_finished() {
        assert!(GameStatus::Draw.is_finished());
        assert!(GameStatus::Won(Player::O).is_finished());
        assert!(!GameStatus::InProgress { next: Player::X }.is_finished());
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
