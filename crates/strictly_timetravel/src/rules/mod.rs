//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules never look at
//! history; the state manager decides what to do with their answers.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, calculate_winner, winning_line};
