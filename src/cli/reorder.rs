//! `wft move` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::profile;
use crate::task::{Category, DragOutcome, DropSide, DropTarget, ReorderEngine, Task};

#[derive(Args)]
pub struct MoveArgs {
    /// Task ID or description of the task to move
    pub identifier: String,

    /// Place the task directly before this task
    #[arg(long, conflicts_with_all = ["after", "end"])]
    pub before: Option<String>,

    /// Place the task directly after this task
    #[arg(long, conflicts_with = "end")]
    pub after: Option<String>,

    /// Place the task at the end of a list
    #[arg(long)]
    pub end: bool,

    /// With --end, move into the time sensitive list
    #[arg(long, requires = "end", conflicts_with = "untimed")]
    pub timed: bool,

    /// With --end, move into the non-time sensitive list
    #[arg(long, requires = "end")]
    pub untimed: bool,
}

impl MoveArgs {
    /// Builds the drop target the same way a pointer release would describe it.
    fn drop_target(&self, moving: &Task, tasks: &[Task]) -> Result<DropTarget> {
        let anchor = match (&self.before, &self.after) {
            (Some(id), _) => Some((id, DropSide::Before)),
            (_, Some(id)) => Some((id, DropSide::After)),
            _ => None,
        };

        if let Some((identifier, side)) = anchor {
            let anchor = super::resolve_task(identifier, tasks)?;
            return Ok(DropTarget::on_task(Category::of(anchor), anchor.id, side));
        }

        if !self.end {
            bail!("Specify where to move the task: --before <task>, --after <task> or --end");
        }

        let category = if self.timed {
            Category::TimeSensitive
        } else if self.untimed {
            Category::Regular
        } else {
            Category::of(moving)
        };
        Ok(DropTarget::end_of(category))
    }
}

pub async fn run(profile: &str, args: MoveArgs) -> Result<()> {
    let mut tracker = profile::open_tracker(profile)?;
    let store = tracker.tasks_mut();

    let task = super::resolve_task(&args.identifier, store.tasks())?;
    let target = args.drop_target(task, store.tasks())?;
    let task_id = task.id;
    let Some(source_index) = store.position(task_id) else {
        bail!("Task not found: {}", args.identifier);
    };

    let mut engine = ReorderEngine::new();
    engine.begin(task_id, source_index);
    engine.hover(Some(target));

    match engine.release(store)? {
        DragOutcome::Committed { to, category, .. } => {
            println!(
                "✓ Moved task {} to position {} ({})",
                task_id,
                to + 1,
                category.title()
            );
        }
        DragOutcome::Cancelled => bail!("Could not move task {}", task_id),
    }

    Ok(())
}
