//! Confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::tui::styles::Theme;

/// Yes/No prompt that hands back `action` when confirmed.
pub struct ConfirmDialog<A> {
    title: String,
    message: String,
    action: A,
    yes_selected: bool,
}

impl<A: Clone> ConfirmDialog<A> {
    pub fn new(title: &str, message: &str, action: A) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action,
            yes_selected: false,
        }
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<A> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => DialogResult::Cancel,
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogResult::Submit(self.action.clone()),
            KeyCode::Enter if self.yes_selected => DialogResult::Submit(self.action.clone()),
            KeyCode::Enter => DialogResult::Cancel,
            KeyCode::Left | KeyCode::Char('h') => {
                self.yes_selected = true;
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.yes_selected = false;
                DialogResult::Continue
            }
            KeyCode::Tab => {
                self.yes_selected = !self.yes_selected;
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 50, 8);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.error).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.message.as_str())
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let button = |label: &'static str, active: bool, color: Color| {
            let style = if active {
                Style::default().fg(color).bold()
            } else {
                Style::default().fg(theme.dimmed)
            };
            Span::styled(label, style)
        };
        let buttons = Line::from(vec![
            button("[Yes]", self.yes_selected, theme.error),
            Span::raw("    "),
            button("[No]", !self.yes_selected, theme.accent),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> ConfirmDialog<u64> {
        ConfirmDialog::new("Delete Task", "Delete 'Farm Forma'?", 42)
    }

    #[test]
    fn test_defaults_to_no() {
        let mut dialog = dialog();
        assert!(!dialog.yes_selected);
        assert!(matches!(dialog.handle_key(key(KeyCode::Enter)), DialogResult::Cancel));
    }

    #[test]
    fn test_y_submits_action() {
        let mut dialog = dialog();
        assert_eq!(*dialog.action(), 42);
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Char('y'))),
            DialogResult::Submit(42)
        ));
    }

    #[test]
    fn test_esc_and_n_cancel() {
        let mut dialog = dialog();
        assert!(matches!(dialog.handle_key(key(KeyCode::Esc)), DialogResult::Cancel));
        assert!(matches!(dialog.handle_key(key(KeyCode::Char('n'))), DialogResult::Cancel));
    }

    #[test]
    fn test_enter_after_selecting_yes() {
        let mut dialog = dialog();
        dialog.handle_key(key(KeyCode::Left));
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Submit(42)
        ));
    }

    #[test]
    fn test_tab_toggles_selection() {
        let mut dialog = dialog();
        dialog.handle_key(key(KeyCode::Tab));
        assert!(dialog.yes_selected);
        dialog.handle_key(key(KeyCode::Tab));
        assert!(!dialog.yes_selected);
        dialog.handle_key(key(KeyCode::Char('h')));
        dialog.handle_key(key(KeyCode::Char('l')));
        assert!(!dialog.yes_selected);
    }

    #[test]
    fn test_unknown_key_continues() {
        let mut dialog = dialog();
        assert!(matches!(dialog.handle_key(key(KeyCode::Char('x'))), DialogResult::Continue));
    }
}
