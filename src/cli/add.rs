//! `wft add` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::profile;
use crate::task::{DraftTask, Interest, TaskType};

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    pub description: String,

    /// Interest level (high, low)
    #[arg(short, long, default_value = "low", value_parser = parse_interest)]
    pub interest: Interest,

    /// Put the task in the time sensitive list
    #[arg(short, long)]
    pub timed: bool,

    /// Where the task is done (see `wft locations`)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Task type (prime-parts, mods, items, hunts)
    #[arg(short = 'k', long = "type", default_value = "prime-parts", value_parser = parse_task_type)]
    pub task_type: TaskType,

    /// Hunt: weapon to look for
    #[arg(long)]
    pub weapon: Option<String>,

    /// Hunt: wanted stats
    #[arg(long)]
    pub stats: Option<String>,

    /// Hunt: the weapon should come with an ephemera
    #[arg(long)]
    pub ephemera: bool,
}

pub fn parse_interest(s: &str) -> Result<Interest, String> {
    Interest::parse(s).ok_or_else(|| format!("invalid interest '{}', expected high or low", s))
}

pub fn parse_task_type(s: &str) -> Result<TaskType, String> {
    TaskType::parse(s).ok_or_else(|| {
        format!(
            "invalid type '{}', expected one of: prime-parts, mods, items, hunts",
            s
        )
    })
}

impl AddArgs {
    fn to_draft(&self) -> DraftTask {
        let mut draft = DraftTask::new();
        draft
            .set_description(self.description.trim())
            .set_interest(self.interest)
            .set_time_sensitive(self.timed)
            .set_location(self.location.clone().unwrap_or_default())
            .set_type(self.task_type)
            .set_weapon(self.weapon.clone().unwrap_or_default())
            .set_stats(self.stats.clone().unwrap_or_default())
            .set_has_ephemera(self.ephemera);
        draft
    }

    fn has_hunt_fields(&self) -> bool {
        self.weapon.is_some() || self.stats.is_some() || self.ephemera
    }
}

pub async fn run(profile: &str, args: AddArgs) -> Result<()> {
    if args.has_hunt_fields() && args.task_type != TaskType::Hunts {
        bail!("--weapon, --stats and --ephemera only apply to --type hunts");
    }

    let mut tracker = profile::open_tracker(profile)?;
    let mut draft = args.to_draft();

    let Some(id) = draft.commit(tracker.tasks_mut())? else {
        bail!("Task description cannot be empty");
    };

    let list = if args.timed {
        "time sensitive"
    } else {
        "non-time sensitive"
    };
    println!("✓ Added task {} to the {} list", id, list);
    println!("  {} {} {}", args.interest.marker(), args.task_type, args.description.trim());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::cli::Commands;
    use clap::Parser;

    fn parse_add(args: &[&str]) -> AddArgs {
        let mut argv = vec!["wft", "add"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Some(Commands::Add(args)) => args,
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse_add(&["Farm Forma"]);
        assert_eq!(args.interest, Interest::Low);
        assert_eq!(args.task_type, TaskType::PrimeParts);
        assert!(!args.timed);

        let draft = args.to_draft();
        assert_eq!(draft.description, "Farm Forma");
        assert_eq!(draft.location, "");
    }

    #[test]
    fn test_all_flags() {
        let args = parse_add(&[
            "Hunt Sister",
            "--interest",
            "high",
            "--timed",
            "--location",
            "Neptune",
            "--type",
            "hunts",
            "--weapon",
            "Tenet Envoy",
            "--ephemera",
        ]);
        assert!(args.has_hunt_fields());

        let task = args.to_draft().to_new_task();
        assert_eq!(task.interest, Interest::High);
        assert!(task.time_sensitive);
        assert_eq!(task.location, "Neptune");
        let details = task.kind.hunt_details().unwrap();
        assert_eq!(details.weapon, "Tenet Envoy");
        assert!(details.has_ephemera);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["wft", "add", "x", "--interest", "medium"]).is_err());
        assert!(Cli::try_parse_from(["wft", "add", "x", "--type", "relics"]).is_err());
    }
}
