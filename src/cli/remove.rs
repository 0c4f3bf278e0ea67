//! `wft remove` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::profile;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task ID or description
    pub identifier: String,
}

pub async fn run(profile: &str, args: RemoveArgs) -> Result<()> {
    let mut tracker = profile::open_tracker(profile)?;

    if tracker.constants().get(&args.identifier).is_some() {
        bail!(
            "'{}' is a constant task and cannot be removed; use `wft constant set` to edit it",
            args.identifier
        );
    }

    let task = super::resolve_task(&args.identifier, tracker.tasks().tasks())?;
    let id = task.id;
    let description = task.description.clone();

    tracker.tasks_mut().remove(id)?;
    println!("✓ Removed task {}: {}", id, description);

    Ok(())
}
