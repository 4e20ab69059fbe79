//! Terminal UI for `strictly_timetravel`.
//!
//! [`App`] owns a [`strictly_timetravel::TimeTravelGame`] and translates key
//! presses into moves and jumps; [`ui::draw`] renders the status line, the
//! board with its cell cursor, and the move list.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use config::{ConfigError, FrontendConfig};
pub use input::{digit_square, move_cursor};
