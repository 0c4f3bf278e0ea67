//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::get_app_dir;
use crate::task::EXPORT_FILE_NAME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_profile")]
    pub default_profile: String,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub backup: BackupConfig,

    #[serde(default)]
    pub tui: TuiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: default_profile(),
            theme: ThemeConfig::default(),
            backup: BackupConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

fn default_profile() -> String {
    super::DEFAULT_PROFILE.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Directory exports are written to when no path is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,

    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            file_name: default_export_file_name(),
        }
    }
}

fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

impl BackupConfig {
    /// Where an export goes when the user did not name a path.
    pub fn default_export_path(&self) -> PathBuf {
        let dir = match &self.export_dir {
            Some(dir) => expand_home(dir),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        dir.join(&self.file_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

fn default_true() -> bool {
    true
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
