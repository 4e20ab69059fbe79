//! Tic-tac-toe with move history and time travel.
//!
//! Two pieces make up the core:
//!
//! - **Win evaluator** ([`calculate_winner`]): a pure function over one board.
//! - **State manager** ([`TimeTravelGame`]): every board snapshot since game
//!   start plus a cursor into them. Moves branch from the displayed snapshot;
//!   jumps only move the cursor.
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameStatus, Player, TimeTravelGame};
//!
//! let mut game = TimeTravelGame::new();
//! for idx in [4, 0, 8, 2, 6, 1] {
//!     game.apply_move(idx);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::O));
//!
//! game.jump_to(2).unwrap();
//! game.apply_move(2);
//! assert_eq!(game.history_len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{HistoryError, Move, MoveError};
pub use game::TimeTravelGame;
pub use history::History;
pub use position::Position;
pub use rules::{calculate_winner, is_draw, winning_line};
pub use status::{GameStatus, MoveEntry};
pub use types::{Board, Player, Square};
