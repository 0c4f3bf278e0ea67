//! Single-line text field rendering

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Renders `label value`, with an inverse-video cursor block when focused.
/// Empty unfocused fields show `placeholder` dimmed.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    placeholder: Option<&str>,
    theme: &Theme,
) {
    frame.render_widget(
        Paragraph::new(text_field_line(label, input, is_focused, placeholder, theme)),
        area,
    );
}

fn text_field_line<'a>(
    label: &'a str,
    input: &'a Input,
    is_focused: bool,
    placeholder: Option<&'a str>,
    theme: &Theme,
) -> Line<'a> {
    let (label_style, value_style) = if is_focused {
        (
            Style::default().fg(theme.accent).underlined(),
            Style::default().fg(theme.accent),
        )
    } else {
        (Style::default().fg(theme.text), Style::default().fg(theme.text))
    };

    let mut spans = vec![Span::styled(label, label_style), Span::raw(" ")];
    let value = input.value();

    if !is_focused {
        match placeholder {
            Some(text) if value.is_empty() => {
                spans.push(Span::styled(text, Style::default().fg(theme.dimmed)))
            }
            _ => spans.push(Span::styled(value, value_style)),
        }
        return Line::from(spans);
    }

    let cursor = input.cursor();
    let before: String = value.chars().take(cursor).collect();
    let at: String = value.chars().nth(cursor).map(String::from).unwrap_or_else(|| " ".into());
    let after: String = value.chars().skip(cursor + 1).collect();

    spans.push(Span::styled(before, value_style));
    spans.push(Span::styled(
        at,
        Style::default().fg(theme.background).bg(theme.accent),
    ));
    spans.push(Span::styled(after, value_style));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let theme = Theme::default();
        let input = Input::default();
        let line = text_field_line("Location:", &input, false, Some("Earth"), &theme);
        assert_eq!(text(&line), "Location: Earth");
    }

    #[test]
    fn test_focused_field_shows_cursor_cell() {
        let theme = Theme::default();
        let input = Input::new("Void".to_string());
        let line = text_field_line("Location:", &input, true, None, &theme);
        assert_eq!(text(&line), "Location: Void ");
        let cursor = &line.spans[3];
        assert_eq!(cursor.content, " ");
        assert_eq!(cursor.style.bg, Some(theme.accent));
    }
}
