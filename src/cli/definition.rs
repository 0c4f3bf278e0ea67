//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::add::AddArgs;
use super::backup::{ExportArgs, ImportArgs};
use super::constant::ConstantCommands;
use super::list::ListArgs;
use super::locations::LocationsArgs;
use super::profile::ProfileCommands;
use super::remove::RemoveArgs;
use super::reorder::MoveArgs;

#[derive(Parser)]
#[command(name = "wft")]
#[command(about = "Track Warframe objectives from the terminal")]
#[command(version)]
pub struct Cli {
    /// Profile to use (defaults to the configured default profile)
    #[arg(short, long, global = true, env = "WARFRAME_TASKS_PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    #[command(alias = "new")]
    Add(AddArgs),

    /// List both task lists
    #[command(alias = "ls")]
    List(ListArgs),

    /// Remove a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Move a task before/after another task or to the end of a list
    #[command(alias = "mv")]
    Move(MoveArgs),

    /// Show or edit constant tasks
    Constant {
        #[command(subcommand)]
        command: Option<ConstantCommands>,
    },

    /// Export both stores to a JSON backup
    Export(ExportArgs),

    /// Restore tasks from a JSON backup
    Import(ImportArgs),

    /// Show location suggestions
    Locations(LocationsArgs),

    /// Manage profiles
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
