//! TUI components

mod help;
mod list_picker;
mod text_input;

pub use help::HelpOverlay;
pub use list_picker::{ListPicker, ListPickerResult};
pub use text_input::render_text_field;
