//! Import backup dialog

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::path::{Path, PathBuf};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

pub struct ImportDialog {
    path: Input,
}

impl ImportDialog {
    pub fn new(default_path: &Path) -> Self {
        Self {
            path: Input::new(default_path.to_string_lossy().to_string()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<PathBuf> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                let value = self.path.value().trim();
                if value.is_empty() {
                    DialogResult::Continue
                } else {
                    DialogResult::Submit(PathBuf::from(value))
                }
            }
            _ => {
                self.path.handle_event(&Event::Key(key));
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 72, 8);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Import Backup ")
            .title_style(Style::default().fg(theme.title).bold());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new("Replaces the lists found in the file. Other lists are kept.")
                .style(Style::default().fg(theme.dimmed))
                .wrap(Wrap { trim: true }),
            chunks[0],
        );
        render_text_field(frame, chunks[1], "File:", &self.path, true, None, theme);

        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" import  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[2]);
    }
}
