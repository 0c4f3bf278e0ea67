//! `wft constant` subcommands implementation

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::profile;

#[derive(Subcommand)]
pub enum ConstantCommands {
    /// List constant tasks
    #[command(alias = "ls")]
    List,

    /// Replace a constant task's description
    Set {
        /// Constant task ID (e.g. incarnon-weapon)
        id: String,

        /// New description
        description: String,
    },
}

pub async fn run(profile: &str, command: Option<ConstantCommands>) -> Result<()> {
    match command {
        Some(ConstantCommands::List) | None => list_constants(profile),
        Some(ConstantCommands::Set { id, description }) => {
            set_description(profile, &id, &description)
        }
    }
}

fn list_constants(profile: &str) -> Result<()> {
    let tracker = profile::open_tracker(profile)?;
    let constants = tracker.constants().tasks();

    if constants.is_empty() {
        println!("No constant tasks.");
        return Ok(());
    }

    for task in constants {
        println!("{} {} [{}]", task.interest.marker(), task.id, task.label);
        println!("    {}", task.description);
        if !task.location.is_empty() {
            println!("    Location: {}", task.location);
        }
    }
    Ok(())
}

fn set_description(profile: &str, id: &str, description: &str) -> Result<()> {
    let mut tracker = profile::open_tracker(profile)?;
    let constants = tracker.constants_mut();

    if constants.get(id).is_none() {
        let known: Vec<&str> = constants.tasks().iter().map(|t| t.id.as_str()).collect();
        bail!(
            "Constant task not found: {} (known: {})",
            id,
            known.join(", ")
        );
    }

    if description.trim().is_empty() {
        bail!("Constant task description cannot be empty");
    }

    // Edits only apply while the task is in edit mode.
    if !constants.is_editing(id) {
        constants.toggle_edit(id)?;
    }
    constants.set_description(id, description)?;
    constants.toggle_edit(id)?;

    println!("✓ Updated constant task {}", id);
    Ok(())
}
