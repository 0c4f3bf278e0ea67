//! TUI dialog components

mod confirm;
mod import;
mod info;
mod new_task;

pub use confirm::ConfirmDialog;
pub use import::ImportDialog;
pub use info::InfoDialog;
pub use new_task::NewTaskDialog;

use ratatui::layout::Rect;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
