//! App directory, profiles and configuration
//!
//! Everything lives under `~/.warframe-tasks/`:
//!
//! ```text
//! config.toml
//! debug.log
//! profiles/<name>/tasks.json
//! profiles/<name>/constantTasks.json
//! ```

mod config;

pub use config::*;

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::storage::FileStore;
use crate::task::Tracker;

pub const DEFAULT_PROFILE: &str = "default";

pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
    let dir = home.join(".warframe-tasks");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

pub fn get_profile_dir(profile: &str) -> Result<PathBuf> {
    let dir = get_app_dir()?.join("profiles").join(profile);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Resolves an empty or missing profile name to the configured default.
pub fn resolve_profile(profile: Option<&str>) -> String {
    match profile {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => load_config()
            .ok()
            .flatten()
            .map(|c| c.default_profile)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
    }
}

pub fn open_store(profile: &str) -> Result<FileStore> {
    Ok(FileStore::new(get_profile_dir(profile)?))
}

pub fn open_tracker(profile: &str) -> Result<Tracker<FileStore>> {
    let store = open_store(profile)?;
    Ok(Tracker::load(store)?)
}

pub fn list_profiles() -> Result<Vec<String>> {
    let profiles_dir = get_app_dir()?.join("profiles");
    if !profiles_dir.exists() {
        return Ok(Vec::new());
    }

    let mut profiles = Vec::new();
    for entry in fs::read_dir(&profiles_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            profiles.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    profiles.sort();
    Ok(profiles)
}

fn validate_profile_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Profile name cannot be empty");
    }
    if name.contains(['/', '\\']) || name.starts_with('.') {
        bail!("Invalid profile name: {}", name);
    }
    Ok(())
}

pub fn create_profile(name: &str) -> Result<()> {
    validate_profile_name(name)?;
    let dir = get_app_dir()?.join("profiles").join(name);
    if dir.exists() {
        bail!("Profile '{}' already exists", name);
    }
    fs::create_dir_all(&dir)?;
    info!("Created profile {}", name);
    Ok(())
}

pub fn delete_profile(name: &str) -> Result<()> {
    validate_profile_name(name)?;
    if name == resolve_profile(None) {
        bail!("Cannot delete the default profile '{}'", name);
    }

    let dir = get_app_dir()?.join("profiles").join(name);
    if !dir.exists() {
        bail!("Profile '{}' does not exist", name);
    }
    fs::remove_dir_all(&dir)?;
    info!("Deleted profile {}", name);
    Ok(())
}

pub fn set_default_profile(name: &str) -> Result<()> {
    let mut config = load_config()?.unwrap_or_default();
    config.default_profile = name.to_string();
    save_config(&config)
}
