use crate::tui::styles::Theme;
use tracing::warn;

pub const AVAILABLE_THEMES: &[&str] = &["phosphor", "tokyo-night", "void"];

const PHOSPHOR_TOML: &str = include_str!("phosphor.toml");
const TOKYO_NIGHT_TOML: &str = include_str!("tokyo-night.toml");
const VOID_TOML: &str = include_str!("void.toml");

/// Loads a built-in theme by name. An empty name selects the default.
pub fn load_theme(name: &str) -> Theme {
    let toml_str = match name {
        "" | "phosphor" => PHOSPHOR_TOML,
        "tokyo-night" => TOKYO_NIGHT_TOML,
        "void" => VOID_TOML,
        _ => {
            warn!("Unknown theme '{}', falling back to phosphor", name);
            PHOSPHOR_TOML
        }
    };

    match toml::from_str(toml_str) {
        Ok(theme) => theme,
        Err(e) => {
            warn!(
                "Failed to parse theme '{}': {}, using default phosphor",
                name, e
            );
            Theme::phosphor()
        }
    }
}
