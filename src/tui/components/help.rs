//! Help overlay component

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::dialogs::centered_rect;
use crate::tui::styles::Theme;

const DIALOG_WIDTH: u16 = 52;
const KEY_WIDTH: u16 = 10;

struct Section {
    title: &'static str,
    keys: &'static [(&'static str, &'static str)],
}

const SECTIONS: &[Section] = &[
    Section {
        title: "Navigation",
        keys: &[
            ("j/k ↑/↓", "Move the cursor"),
            ("Tab h/l", "Switch list"),
            ("g/G", "Top / bottom"),
        ],
    },
    Section {
        title: "Tasks",
        keys: &[
            ("n", "New task in the focused list"),
            ("d/Del", "Delete task"),
            ("i/Enter", "Task details"),
            ("e", "Edit constant task"),
        ],
    },
    Section {
        title: "Reorder",
        keys: &[
            ("Space", "Grab, then drop the task"),
            ("j/k Tab", "Pick a spot while holding"),
            ("Esc", "Put the task back"),
            ("Mouse", "Drag a card onto another"),
        ],
    },
    Section {
        title: "Other",
        keys: &[
            ("x", "Export to the backup file"),
            ("I", "Import a backup"),
            ("?", "Toggle help"),
            ("q", "Quit"),
        ],
    },
];

/// Header row per section, one row per key, a blank row between sections.
fn row_count() -> u16 {
    let rows: usize = SECTIONS.iter().map(|s| s.keys.len() + 2).sum();
    (rows - 1) as u16
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, DIALOG_WIDTH, row_count() + 2);
        frame.render_widget(Clear, dialog_area);

        let mut rows = Vec::new();
        for (i, section) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from("")]));
            }
            rows.push(Row::new(vec![Cell::from(section.title)
                .style(Style::default().fg(theme.accent).bold())]));
            for (key, desc) in section.keys {
                rows.push(Row::new(vec![
                    Cell::from(format!(" {}", key)).style(Style::default().fg(theme.high_interest)),
                    Cell::from(*desc).style(Style::default().fg(theme.text)),
                ]));
            }
        }

        let table = Table::new(rows, [Constraint::Length(KEY_WIDTH + 1), Constraint::Fill(1)])
            .block(
                Block::default()
                    .style(Style::default().bg(theme.background))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(theme.title).bold()),
            );
        frame.render_widget(table, dialog_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_keys_fit_key_column() {
        for section in SECTIONS {
            for (key, desc) in section.keys {
                assert!(key.width() < KEY_WIDTH as usize, "key '{}' too wide", key);
                let line = 1 + KEY_WIDTH as usize + 1 + desc.width();
                assert!(line <= (DIALOG_WIDTH - 2) as usize, "'{}' too wide", desc);
            }
        }
    }

    #[test]
    fn test_overlay_fits_small_terminal() {
        // 80x24 is the smallest terminal we lay out for
        assert!(row_count() + 2 <= 24);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| HelpOverlay::render(f, f.area(), &Theme::default()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Put the task back"));
    }
}
