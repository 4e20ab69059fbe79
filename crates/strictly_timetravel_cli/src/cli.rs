//! Command-line interface for the time-travel front end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Hide the move list panel
    #[arg(long)]
    pub no_move_list: bool,

    /// Write the game history as JSON to this file on exit
    #[arg(long)]
    pub dump_history: Option<PathBuf>,
}
