//! Signup TUI - terminal signup form with field-level validation
//!
//! A Ratatui-based form that validates email, name, zip code and password
//! fields as they are typed.

mod app;
mod config;
mod logging;
mod platform;
mod state;
mod submit;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use submit::LogSubmitHandler;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let config = TuiConfig::load()?;

    // Initialize logging before anything can emit events
    let log_path = logging::log_path();
    if let Some(message) = logging::init(config.log_filter(), log_path.as_deref()) {
        eprintln!("Warning: {message}");
    }

    // Write the defaults on first run so they can be edited
    if !TuiConfig::exists() {
        if let Err(e) = config.save() {
            tracing::warn!("failed to save default config: {e:#}");
        }
    }

    let mut app = App::new(
        config.validation_config()?,
        Box::new(LogSubmitHandler::new()),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            // Only presses; some platforms also report releases
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
