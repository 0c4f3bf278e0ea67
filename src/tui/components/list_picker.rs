//! Filterable suggestion list overlay

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::tui::styles::Theme;

const MAX_VISIBLE: usize = 8;

pub enum ListPickerResult {
    Continue,
    Cancelled,
    Selected(String),
}

/// Suggestions are only a convenience: with nothing matching, Enter hands
/// back the typed text as-is.
pub struct ListPicker {
    active: bool,
    filter: Input,
    selected: usize,
    items: Vec<String>,
    title: String,
}

impl ListPicker {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            active: false,
            filter: Input::default(),
            selected: 0,
            items: Vec::new(),
            title: title.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self, items: Vec<String>, filter: &str) {
        self.active = true;
        self.items = items;
        self.filter = Input::new(filter.to_string());
        self.selected = 0;
    }

    pub fn filtered_items(&self) -> Vec<&String> {
        let filter = self.filter.value().trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.to_lowercase().contains(&filter))
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ListPickerResult {
        let filtered_len = self.filtered_items().len();

        match key.code {
            KeyCode::Esc => {
                self.active = false;
                ListPickerResult::Cancelled
            }
            KeyCode::Enter => {
                self.active = false;
                let typed = self.filter.value().trim();
                match self.filtered_items().get(self.selected) {
                    Some(item) => ListPickerResult::Selected((*item).clone()),
                    None if !typed.is_empty() => ListPickerResult::Selected(typed.to_string()),
                    None => ListPickerResult::Cancelled,
                }
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ListPickerResult::Continue
            }
            KeyCode::Down => {
                if self.selected + 1 < filtered_len {
                    self.selected += 1;
                }
                ListPickerResult::Continue
            }
            _ if key.modifiers.contains(KeyModifiers::CONTROL) => ListPickerResult::Continue,
            _ => {
                self.filter.handle_event(&Event::Key(key));
                self.selected = 0;
                ListPickerResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let filtered = self.filtered_items();
        let list_height = filtered.len().clamp(1, MAX_VISIBLE) as u16;
        // filter + spacer + list + hint + borders + margin
        let dialog_area = crate::tui::dialogs::centered_rect(area, 44, list_height + 7);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.title).bold());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let filter_line = Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(theme.text)),
            Span::styled(self.filter.value(), Style::default().fg(theme.accent).bold()),
            Span::styled("_", Style::default().fg(theme.accent)),
        ]);
        frame.render_widget(Paragraph::new(filter_line), chunks[0]);

        let visible = chunks[2].height as usize;
        let offset = (self.selected + 1).saturating_sub(visible);
        let lines: Vec<Line> = if filtered.is_empty() {
            vec![Line::from(Span::styled(
                "  (no match, Enter keeps the typed text)",
                Style::default().fg(theme.dimmed),
            ))]
        } else {
            filtered
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .map(|(idx, item)| {
                    if idx == self.selected {
                        Line::from(Span::styled(
                            format!("> {}", item),
                            Style::default().fg(theme.accent).bold(),
                        ))
                    } else {
                        Line::from(Span::styled(
                            format!("  {}", item),
                            Style::default().fg(theme.text),
                        ))
                    }
                })
                .collect()
        };
        frame.render_widget(Paragraph::new(lines), chunks[2]);

        let hint = Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(theme.hint)),
            Span::raw(" choose  "),
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" select  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::locations::LOCATIONS;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn picker(filter: &str) -> ListPicker {
        let mut picker = ListPicker::new("Location");
        picker.activate(LOCATIONS.iter().map(|l| l.to_string()).collect(), filter);
        picker
    }

    #[test]
    fn test_new_is_inactive() {
        assert!(!ListPicker::new("Location").is_active());
    }

    #[test]
    fn test_initial_filter_narrows() {
        let picker = picker("ne");
        let items: Vec<&str> = picker.filtered_items().iter().map(|s| s.as_str()).collect();
        assert_eq!(items, vec!["Neptune"]);
    }

    #[test]
    fn test_enter_selects_highlighted() {
        let mut picker = picker("");
        picker.handle_key(key(KeyCode::Down));
        match picker.handle_key(key(KeyCode::Enter)) {
            ListPickerResult::Selected(value) => assert_eq!(value, "Venus"),
            _ => panic!("Expected Selected"),
        }
        assert!(!picker.is_active());
    }

    #[test]
    fn test_j_and_k_are_filter_text() {
        let mut picker = picker("");
        picker.handle_key(key(KeyCode::Char('j')));
        picker.handle_key(key(KeyCode::Char('u')));
        let items: Vec<&str> = picker.filtered_items().iter().map(|s| s.as_str()).collect();
        assert_eq!(items, vec!["Jupiter"]);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut picker = picker("rail");
        picker.handle_key(key(KeyCode::Down));
        picker.handle_key(key(KeyCode::Down));
        assert_eq!(picker.selected, 0);
        picker.handle_key(key(KeyCode::Up));
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn test_no_match_returns_typed_text() {
        let mut picker = picker("Zariman");
        match picker.handle_key(key(KeyCode::Enter)) {
            ListPickerResult::Selected(value) => assert_eq!(value, "Zariman"),
            _ => panic!("Expected Selected"),
        }
    }

    #[test]
    fn test_empty_filter_with_no_items_cancels() {
        let mut picker = ListPicker::new("Location");
        picker.activate(Vec::new(), "");
        assert!(matches!(
            picker.handle_key(key(KeyCode::Enter)),
            ListPickerResult::Cancelled
        ));
    }

    #[test]
    fn test_esc_cancels() {
        let mut picker = picker("");
        assert!(matches!(
            picker.handle_key(key(KeyCode::Esc)),
            ListPickerResult::Cancelled
        ));
        assert!(!picker.is_active());
    }
}
