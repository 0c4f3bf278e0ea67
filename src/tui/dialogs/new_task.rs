//! New task dialog

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::{locations, DraftTask};
use crate::tui::components::{render_text_field, ListPicker, ListPickerResult};
use crate::tui::styles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Description,
    TimeSensitive,
    Interest,
    Location,
    Type,
    Weapon,
    Stats,
    Ephemera,
}

fn is_text_field(field: Field) -> bool {
    matches!(
        field,
        Field::Description | Field::Location | Field::Weapon | Field::Stats
    )
}

const BASE_FIELDS: &[Field] = &[
    Field::Description,
    Field::TimeSensitive,
    Field::Interest,
    Field::Location,
    Field::Type,
];

const HUNT_FIELDS: &[Field] = &[
    Field::Description,
    Field::TimeSensitive,
    Field::Interest,
    Field::Location,
    Field::Type,
    Field::Weapon,
    Field::Stats,
    Field::Ephemera,
];

pub struct NewTaskDialog {
    draft: DraftTask,
    description: Input,
    location: Input,
    weapon: Input,
    stats: Input,
    focused: Field,
    location_picker: ListPicker,
    error_message: Option<String>,
}

impl NewTaskDialog {
    pub fn new(time_sensitive: bool) -> Self {
        let mut draft = DraftTask::new();
        draft.set_time_sensitive(time_sensitive);
        Self {
            draft,
            description: Input::default(),
            location: Input::default(),
            weapon: Input::default(),
            stats: Input::default(),
            focused: Field::Description,
            location_picker: ListPicker::new("Location"),
            error_message: None,
        }
    }

    pub fn draft(&self) -> &DraftTask {
        &self.draft
    }

    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    fn fields(&self) -> &'static [Field] {
        if self.draft.task_type == crate::task::TaskType::Hunts {
            HUNT_FIELDS
        } else {
            BASE_FIELDS
        }
    }

    fn focus_step(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focused = fields[next];
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut Input> {
        match field {
            Field::Description => Some(&mut self.description),
            Field::Location => Some(&mut self.location),
            Field::Weapon => Some(&mut self.weapon),
            Field::Stats => Some(&mut self.stats),
            _ => None,
        }
    }

    fn sync_text_fields(&mut self) {
        self.draft
            .set_description(self.description.value().trim())
            .set_location(self.location.value().trim())
            .set_weapon(self.weapon.value().trim())
            .set_stats(self.stats.value().trim());
    }

    fn cycle(&mut self, forward: bool) {
        match self.focused {
            Field::TimeSensitive => {
                let flag = !self.draft.time_sensitive;
                self.draft.set_time_sensitive(flag);
            }
            Field::Interest => {
                let interest = self.draft.interest.toggled();
                self.draft.set_interest(interest);
            }
            Field::Type => {
                let task_type = if forward {
                    self.draft.task_type.next()
                } else {
                    self.draft.task_type.prev()
                };
                self.draft.set_type(task_type);
            }
            Field::Ephemera => {
                let flag = !self.draft.hunt_details.has_ephemera;
                self.draft.set_has_ephemera(flag);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<DraftTask> {
        if self.location_picker.is_active() {
            if let ListPickerResult::Selected(location) = self.location_picker.handle_key(key) {
                self.location = Input::new(location);
                self.sync_text_fields();
            }
            return DialogResult::Continue;
        }

        let is_toggle = !is_text_field(self.focused);
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                self.sync_text_fields();
                if self.draft.is_committable() {
                    DialogResult::Submit(self.draft.clone())
                } else {
                    self.error_message = Some("Description cannot be empty".to_string());
                    self.focused = Field::Description;
                    DialogResult::Continue
                }
            }
            KeyCode::Down if self.focused == Field::Location => {
                let items = locations::LOCATIONS.iter().map(|l| l.to_string()).collect();
                self.location_picker.activate(items, self.location.value());
                DialogResult::Continue
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_step(true);
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_step(false);
                DialogResult::Continue
            }
            KeyCode::Left if is_toggle => {
                self.cycle(false);
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char(' ') if is_toggle => {
                self.cycle(true);
                DialogResult::Continue
            }
            _ => {
                let focused = self.focused;
                if let Some(input) = self.input_mut(focused) {
                    input.handle_event(&Event::Key(key));
                    self.sync_text_fields();
                    self.error_message = None;
                }
                DialogResult::Continue
            }
        }
    }

    fn render_choice(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: Field,
        label: &str,
        value: &str,
        theme: &Theme,
    ) {
        let focused = self.focused == field;
        let label_style = if focused {
            Style::default().fg(theme.accent).underlined()
        } else {
            Style::default().fg(theme.text)
        };
        let value_style = if focused {
            Style::default().fg(theme.accent).bold()
        } else {
            Style::default().fg(theme.text)
        };
        let mut spans = vec![Span::styled(label, label_style), Span::raw(" ")];
        if focused {
            spans.push(Span::styled(format!("◀ {} ▶", value), value_style));
        } else {
            spans.push(Span::styled(value, value_style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let fields = self.fields();
        let dialog_height = fields.len() as u16 + 7;
        let dialog_area = super::centered_rect(area, 64, dialog_height);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" New Task ")
            .title_style(Style::default().fg(theme.title).bold());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(1)).collect();
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner);

        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
        for (i, field) in fields.iter().enumerate() {
            let area = chunks[i];
            let focused = self.focused == *field;
            match field {
                Field::Description => render_text_field(
                    frame,
                    area,
                    "Description:",
                    &self.description,
                    focused,
                    Some("e.g. Farm Wisp Prime"),
                    theme,
                ),
                Field::Location => render_text_field(
                    frame,
                    area,
                    "Location:   ",
                    &self.location,
                    focused,
                    Some("↓ for suggestions"),
                    theme,
                ),
                Field::Weapon => render_text_field(
                    frame,
                    area,
                    "Weapon:     ",
                    &self.weapon,
                    focused,
                    None,
                    theme,
                ),
                Field::Stats => render_text_field(
                    frame,
                    area,
                    "Stats:      ",
                    &self.stats,
                    focused,
                    None,
                    theme,
                ),
                Field::TimeSensitive => self.render_choice(
                    frame,
                    area,
                    *field,
                    "Timed:      ",
                    yes_no(self.draft.time_sensitive),
                    theme,
                ),
                Field::Interest => self.render_choice(
                    frame,
                    area,
                    *field,
                    "Interest:   ",
                    &format!("{} {}", self.draft.interest.marker(), self.draft.interest.label()),
                    theme,
                ),
                Field::Type => self.render_choice(
                    frame,
                    area,
                    *field,
                    "Type:       ",
                    self.draft.task_type.label(),
                    theme,
                ),
                Field::Ephemera => self.render_choice(
                    frame,
                    area,
                    *field,
                    "Ephemera:   ",
                    yes_no(self.draft.hunt_details.has_ephemera),
                    theme,
                ),
            }
        }

        if let Some(error) = &self.error_message {
            frame.render_widget(
                Paragraph::new(Span::styled(error.as_str(), Style::default().fg(theme.error))),
                chunks[fields.len() + 1],
            );
        }

        let hint = Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.hint)),
            Span::raw(" next  "),
            Span::styled("←/→", Style::default().fg(theme.hint)),
            Span::raw(" change  "),
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" add  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[fields.len() + 2]);

        if self.location_picker.is_active() {
            self.location_picker.render(frame, area, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Interest, TaskType};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut NewTaskDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn focus(dialog: &mut NewTaskDialog, field: Field) {
        while dialog.focused != field {
            dialog.handle_key(key(KeyCode::Tab));
        }
    }

    #[test]
    fn test_starts_in_requested_list() {
        assert!(NewTaskDialog::new(true).draft().time_sensitive);
        assert!(!NewTaskDialog::new(false).draft().time_sensitive);
    }

    #[test]
    fn test_typing_updates_draft() {
        let mut dialog = NewTaskDialog::new(false);
        type_text(&mut dialog, "Farm Wisp");
        assert_eq!(dialog.draft().description, "Farm Wisp");
    }

    #[test]
    fn test_enter_with_empty_description_shows_error() {
        let mut dialog = NewTaskDialog::new(false);
        let result = dialog.handle_key(key(KeyCode::Enter));
        assert!(matches!(result, DialogResult::Continue));
        assert!(dialog.error_message.is_some());
    }

    #[test]
    fn test_enter_submits_draft() {
        let mut dialog = NewTaskDialog::new(false);
        type_text(&mut dialog, "Farm Wisp");
        focus(&mut dialog, Field::Interest);
        dialog.handle_key(key(KeyCode::Char(' ')));

        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(draft) => {
                assert_eq!(draft.description, "Farm Wisp");
                assert_eq!(draft.interest, Interest::High);
            }
            _ => panic!("Expected Submit"),
        }
    }

    #[test]
    fn test_hunt_fields_only_for_hunts() {
        let mut dialog = NewTaskDialog::new(false);
        assert_eq!(dialog.fields().len(), BASE_FIELDS.len());

        focus(&mut dialog, Field::Type);
        dialog.handle_key(key(KeyCode::Left));
        assert_eq!(dialog.draft().task_type, TaskType::Hunts);
        assert_eq!(dialog.fields().len(), HUNT_FIELDS.len());

        focus(&mut dialog, Field::Weapon);
        type_text(&mut dialog, "Tenet Envoy");
        focus(&mut dialog, Field::Ephemera);
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.draft().hunt_details.weapon, "Tenet Envoy");
        assert!(dialog.draft().hunt_details.has_ephemera);
    }

    #[test]
    fn test_space_in_text_field_is_text() {
        let mut dialog = NewTaskDialog::new(false);
        type_text(&mut dialog, "a b");
        assert_eq!(dialog.description.value(), "a b");
    }

    #[test]
    fn test_location_picker_fills_location() {
        let mut dialog = NewTaskDialog::new(false);
        focus(&mut dialog, Field::Location);
        type_text(&mut dialog, "nep");
        dialog.handle_key(key(KeyCode::Down));
        assert!(dialog.location_picker.is_active());

        dialog.handle_key(key(KeyCode::Enter));
        assert!(!dialog.location_picker.is_active());
        assert_eq!(dialog.draft().location, "Neptune");
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = NewTaskDialog::new(false);
        assert!(matches!(dialog.handle_key(key(KeyCode::Esc)), DialogResult::Cancel));
    }
}
