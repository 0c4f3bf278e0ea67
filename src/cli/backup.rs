//! `wft export` and `wft import` command implementations

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::profile::{self, Config};
use crate::task::describe_summary;

#[derive(Args)]
pub struct ExportArgs {
    /// File or directory to write the backup to (defaults to the configured export path)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to restore from
    pub path: PathBuf,
}

pub async fn export(profile: &str, args: ExportArgs) -> Result<()> {
    let tracker = profile::open_tracker(profile)?;
    let path = match args.path {
        Some(path) => path,
        None => Config::load()?.backup.default_export_path(),
    };

    let written = tracker
        .export_to_file(&path)
        .with_context(|| format!("Failed to export to {}", path.display()))?;
    println!("✓ Exported {} tasks to {}", tracker.tasks().len(), written.display());
    Ok(())
}

pub async fn import(profile: &str, args: ImportArgs) -> Result<()> {
    let mut tracker = profile::open_tracker(profile)?;
    let summary = tracker
        .import_from_file(&args.path)
        .with_context(|| format!("Failed to import {}", args.path.display()))?;
    println!("✓ Imported {}", describe_summary(&summary));
    Ok(())
}
