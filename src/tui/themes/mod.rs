//! Built-in color themes

mod loader;

pub use loader::{load_theme, AVAILABLE_THEMES};
