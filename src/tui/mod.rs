//! Terminal renderer: draws the board and feeds mouse clicks to the engine.

mod app;
mod ui;

pub use app::{App, AppAction};
pub use ui::draw;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mousetoe_core::{Mode, ScoreBoard};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Plays one session in `mode` until the user presses 'q'.
///
/// Returns the session's final score.
#[instrument(skip(config))]
pub fn run_game(mode: Mode, config: &AppConfig) -> Result<ScoreBoard> {
    info!(mode = mode.label(), "Starting game session");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::for_mode(mode, *config.seed(), config.geometry());
    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;

    let score = *app.engine().score();
    info!(%score, "Game session ended");
    Ok(score)
}

/// Redraws, then blocks on the next terminal event, until quit.
fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        let event = event::read().context("Failed to read terminal event")?;
        if app.handle_event(event) == AppAction::Quit {
            return Ok(());
        }
    }
}
