//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;

use super::home::HomeView;
use super::styles::Theme;
use super::themes::load_theme;
use crate::profile::{self, Config};
use crate::storage::FileStore;

pub struct App {
    home: HomeView<FileStore>,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(profile: &str, config: Config) -> Result<Self> {
        let tracker = profile::open_tracker(profile)?;
        let theme = load_theme(&config.theme.name);
        let home = HomeView::new(tracker, profile, config);

        Ok(Self {
            home,
            should_quit: false,
            theme,
        })
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            // Poll with short timeout for responsive input
            if !event::poll(Duration::from_millis(50))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.home.handle_mouse(mouse),
                Event::Resize(_, _) => {}
                _ => continue,
            }

            if self.should_quit {
                break;
            }
            terminal.draw(|f| self.render(f))?;
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.home.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.home.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}

