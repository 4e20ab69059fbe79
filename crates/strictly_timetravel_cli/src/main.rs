//! Time-travel tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, path::Path, sync::Arc, time::Duration};
use strictly_timetravel_cli::{App, Cli, FrontendConfig, ui};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    initialize_tracing(config.log_file(), config.log_filter())?;

    info!(show_move_list = *config.show_move_list(), "Starting time-travel tic-tac-toe");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.show_move_list());
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Event loop failed");
    }
    result?;

    if let Some(path) = &cli.dump_history {
        app.write_history(path)?;
    }
    info!(moves = app.game().history_len() - 1, "Session ended");
    Ok(())
}

/// Draws and handles key presses until the user quits.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if *app.should_quit() {
            return Ok(());
        }
    }
}

/// Reads the config file if one was given, then applies CLI overrides.
fn load_config(cli: &Cli) -> Result<FrontendConfig> {
    let base = match &cli.config {
        Some(path) => FrontendConfig::from_file(path)?,
        None => FrontendConfig::default(),
    };
    Ok(base.with_overrides(cli.log_filter.clone(), cli.no_move_list))
}

/// Logs go to a file; the terminal belongs to the UI.
fn initialize_tracing(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
