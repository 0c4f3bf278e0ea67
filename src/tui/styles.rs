//! TUI theme and styling

use ratatui::style::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Task cards
    pub high_interest: Color,
    pub low_interest: Color,
    pub constant: Color,
    pub hunt: Color,
    pub drop_marker: Color,

    // UI elements
    pub error: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            selection: Color::Rgb(30, 50, 40),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),

            high_interest: Color::Rgb(255, 180, 60),
            low_interest: Color::Rgb(60, 100, 70),
            constant: Color::Rgb(100, 220, 160),
            hunt: Color::Rgb(130, 170, 255),
            drop_marker: Color::Rgb(0, 255, 180),

            error: Color::Rgb(255, 100, 80),
            accent: Color::Rgb(57, 255, 20),
        }
    }
}
