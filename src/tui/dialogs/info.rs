//! Read-only dialog made of labelled fields

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::task::Task;
use crate::tui::styles::Theme;

pub struct InfoDialog {
    title: String,
    fields: Vec<(String, String)>,
    is_error: bool,
}

impl InfoDialog {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            fields: Vec::new(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        let mut dialog = Self::new(title).field("", message);
        dialog.is_error = true;
        dialog
    }

    pub fn field(mut self, label: &str, value: impl Into<String>) -> Self {
        self.fields.push((label.to_string(), value.into()));
        self
    }

    /// Details of a task, including its hunt fields when it has them.
    pub fn for_task(task: &Task) -> Self {
        let mut dialog = Self::new(task.task_type().label())
            .field("Task", task.description.clone())
            .field("Interest", task.interest.label())
            .field(
                "Location",
                if task.location.is_empty() {
                    "-"
                } else {
                    task.location.as_str()
                },
            );
        if let Some(details) = task.hunt_details() {
            dialog = dialog
                .field("Weapon", details.weapon.clone())
                .field("Stats", details.stats.clone())
                .field("Ephemera", if details.has_ephemera { "Yes" } else { "No" });
        }
        dialog
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('i') => {
                DialogResult::Cancel
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let height = self.fields.len() as u16 + 6;
        let dialog_area = super::centered_rect(area, 56, height.max(8));
        frame.render_widget(Clear, dialog_area);

        let color = if self.is_error { theme.error } else { theme.title };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if self.is_error {
                theme.error
            } else {
                theme.border
            }))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(color).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(label, value)| {
                if label.is_empty() {
                    Line::from(Span::styled(value.as_str(), Style::default().fg(theme.text)))
                } else {
                    Line::from(vec![
                        Span::styled(format!("{:<10}", label), Style::default().fg(theme.dimmed)),
                        Span::styled(value.as_str(), Style::default().fg(theme.text)),
                    ])
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

        frame.render_widget(
            Paragraph::new(Span::styled("[OK]", Style::default().fg(theme.accent).bold()))
                .alignment(Alignment::Center),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::model::seed_tasks;
    use crate::task::{HuntDetails, NewTask, TaskId, TaskKind, TaskType};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = InfoDialog::new("Hunt Details");
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char(' ')] {
            assert!(matches!(dialog.handle_key(key(code)), DialogResult::Cancel));
        }
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Char('x'))),
            DialogResult::Continue
        ));
    }

    #[test]
    fn test_for_plain_task() {
        let tasks = seed_tasks();
        let dialog = InfoDialog::for_task(&tasks[0]);
        assert_eq!(dialog.title(), tasks[0].task_type().label());
        assert_eq!(dialog.fields.len(), 3);
    }

    #[test]
    fn test_for_hunt_task_lists_details() {
        let mut task = NewTask::new("Sister of Parvos");
        task.kind = TaskKind::new(
            TaskType::Hunts,
            HuntDetails {
                weapon: "Tenet Arca Plasmor".to_string(),
                stats: "60% Heat".to_string(),
                has_ephemera: true,
            },
        );
        let dialog = InfoDialog::for_task(&task.into_task(TaskId(9)));
        assert_eq!(dialog.title(), "Hunts");
        assert!(dialog
            .fields
            .contains(&("Ephemera".to_string(), "Yes".to_string())));
        assert!(dialog
            .fields
            .contains(&("Weapon".to_string(), "Tenet Arca Plasmor".to_string())));
    }

    #[test]
    fn test_error_dialog() {
        let dialog = InfoDialog::error("Import Failed", "Invalid JSON");
        assert!(dialog.is_error);
        assert_eq!(dialog.fields[0].1, "Invalid JSON");
    }
}
