//! CLI command implementations

pub mod add;
pub mod backup;
pub mod constant;
pub mod definition;
pub mod list;
pub mod locations;
pub mod profile;
pub mod remove;
pub mod reorder;

pub use definition::{Cli, Commands};

use anyhow::{bail, Result};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::task::{Task, TaskId};

/// Finds a task by ID, exact description, or a description substring that
/// matches exactly one task.
pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    if let Some(id) = TaskId::parse(identifier) {
        if let Some(task) = tasks.iter().find(|t| t.id == id) {
            return Ok(task);
        }
    }

    if let Some(task) = tasks.iter().find(|t| t.description == identifier) {
        return Ok(task);
    }

    let needle = identifier.to_lowercase();
    let matches: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.description.to_lowercase().contains(&needle))
        .collect();
    match matches.as_slice() {
        [task] => Ok(*task),
        [] => bail!("Task not found: {}", identifier),
        _ => bail!(
            "'{}' matches {} tasks, use the task ID instead",
            identifier,
            matches.len()
        ),
    }
}

/// Truncates to `max` display columns, ending in "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return take_width(s, max);
    }
    format!("{}...", take_width(s, max - 3))
}

fn take_width(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::model::seed_tasks;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_equal_to_max() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_with_small_max() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_counts_display_width() {
        assert_eq!(truncate("★★★★★", 5), "★★★★★");
        assert_eq!(truncate("ヴォイドの裂け目", 9), "ヴォイ...");
    }

    #[test]
    fn test_resolve_task_by_id() {
        let tasks = seed_tasks();
        assert_eq!(resolve_task("2", &tasks).unwrap().id, TaskId(2));
    }

    #[test]
    fn test_resolve_task_by_exact_description() {
        let tasks = seed_tasks();
        let task = resolve_task("Add Somachord Pop Songs", &tasks).unwrap();
        assert_eq!(task.id, TaskId(3));
    }

    #[test]
    fn test_resolve_task_by_unique_substring() {
        let tasks = seed_tasks();
        assert_eq!(resolve_task("kavat", &tasks).unwrap().id, TaskId(2));
    }

    #[test]
    fn test_resolve_task_ambiguous_substring() {
        let tasks = seed_tasks();
        let err = resolve_task("Farm", &tasks).unwrap_err();
        assert!(err.to_string().contains("matches 2 tasks"));
    }

    #[test]
    fn test_resolve_task_not_found() {
        let tasks = seed_tasks();
        let err = resolve_task("Lua", &tasks).unwrap_err();
        assert!(err.to_string().contains("Task not found"));
        assert!(resolve_task("99", &tasks).is_err());
    }
}
