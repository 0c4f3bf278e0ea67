//! Terminal User Interface module

mod app;
mod components;
pub mod dialogs;
mod home;
mod styles;
pub mod themes;

pub use app::*;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use tracing::info;

use crate::profile::Config;

pub async fn run(profile: &str) -> Result<()> {
    let config = Config::load()?;
    let mouse = config.tui.mouse;
    info!("Starting TUI for profile '{}' (mouse: {})", profile, mouse);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let result = match App::new(profile, config) {
        Ok(mut app) => app.run(&mut terminal).await,
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
