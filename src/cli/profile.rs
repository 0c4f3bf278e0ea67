//! `wft profile` subcommands implementation

use anyhow::{bail, Result};
use clap::Subcommand;
use std::io::{self, Write};

use crate::profile;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Create a new profile
    #[command(alias = "new")]
    Create {
        /// Profile name
        name: String,
    },

    /// Delete a profile and its tasks
    #[command(alias = "rm")]
    Delete {
        /// Profile name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show or set default profile
    Default {
        /// Profile name (optional, shows current if not provided)
        name: Option<String>,
    },
}

pub async fn run(command: Option<ProfileCommands>) -> Result<()> {
    match command {
        Some(ProfileCommands::List) | None => list_profiles(),
        Some(ProfileCommands::Create { name }) => create_profile(&name),
        Some(ProfileCommands::Delete { name, yes }) => delete_profile(&name, yes),
        Some(ProfileCommands::Default { name: Some(name) }) => set_default_profile(&name),
        Some(ProfileCommands::Default { name: None }) => {
            println!("Default profile: {}", profile::resolve_profile(None));
            Ok(())
        }
    }
}

fn list_profiles() -> Result<()> {
    let profiles = profile::list_profiles()?;
    let default_profile = profile::resolve_profile(None);

    if profiles.is_empty() {
        println!("No profiles found.");
        println!("Run 'wft' to create the default profile automatically.");
        return Ok(());
    }

    println!("Profiles:");
    for p in &profiles {
        if *p == default_profile {
            println!("  * {} (default)", p);
        } else {
            println!("    {}", p);
        }
    }
    println!("\nTotal: {} profiles", profiles.len());

    Ok(())
}

fn create_profile(name: &str) -> Result<()> {
    profile::create_profile(name)?;
    println!("✓ Created profile: {}", name);
    println!("  Use with: wft -p {}", name);
    Ok(())
}

fn delete_profile(name: &str, yes: bool) -> Result<()> {
    if !yes {
        print!(
            "Delete profile '{}' and all of its tasks? [y/N] ",
            name
        );
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        if !response.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    profile::delete_profile(name)?;
    println!("✓ Deleted profile: {}", name);
    Ok(())
}

fn set_default_profile(name: &str) -> Result<()> {
    let profiles = profile::list_profiles()?;
    if !profiles.iter().any(|p| p == name) {
        bail!("Profile '{}' does not exist", name);
    }

    profile::set_default_profile(name)?;
    println!("✓ Default profile set to: {}", name);
    Ok(())
}
