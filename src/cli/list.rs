//! `wft list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::profile;
use crate::task::{Category, HuntDetails, Row};

const TABLE_COL_ID: usize = 18;
const TABLE_COL_TYPE: usize = 18;
const TABLE_COL_DESCRIPTION: usize = 44;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Only show one list
    #[arg(long, value_parser = ["timed", "untimed"])]
    only: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RowJson {
    id: String,
    description: String,
    interest: String,
    location: String,
    #[serde(rename = "type")]
    task_type: String,
    constant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    hunt_details: Option<HuntDetails>,
}

impl From<&Row<'_>> for RowJson {
    fn from(row: &Row<'_>) -> Self {
        match row {
            Row::Constant(task) => Self {
                id: task.id.clone(),
                description: task.description.clone(),
                interest: task.interest.label().to_string(),
                location: task.location.clone(),
                task_type: task.label.clone(),
                constant: true,
                hunt_details: None,
            },
            Row::Task(task) => Self {
                id: task.id.to_string(),
                description: task.description.clone(),
                interest: task.interest.label().to_string(),
                location: task.location.clone(),
                task_type: task.task_type().label().to_string(),
                constant: false,
                hunt_details: task.hunt_details().cloned(),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    time_sensitive: Option<Vec<RowJson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    non_time_sensitive: Option<Vec<RowJson>>,
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_type$} {:<width_desc$} LOCATION",
        "ID",
        "TYPE",
        "DESCRIPTION",
        width_id = TABLE_COL_ID,
        width_type = TABLE_COL_TYPE,
        width_desc = TABLE_COL_DESCRIPTION,
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_TYPE + TABLE_COL_DESCRIPTION + 12)
    );
}

fn print_table_row(row: &Row<'_>) {
    let (id, marker, task_type, location) = match row {
        Row::Constant(task) => (task.id.clone(), "★", task.label.as_str(), task.location.as_str()),
        Row::Task(task) => (
            task.id.to_string(),
            task.interest.marker(),
            task.task_type().label(),
            task.location.as_str(),
        ),
    };
    let kind = format!("{} {}", marker, task_type);
    println!(
        "{:<width_id$} {:<width_type$} {:<width_desc$} {}",
        super::truncate(&id, TABLE_COL_ID),
        super::truncate(&kind, TABLE_COL_TYPE),
        super::truncate(row.description(), TABLE_COL_DESCRIPTION),
        location,
        width_id = TABLE_COL_ID,
        width_type = TABLE_COL_TYPE,
        width_desc = TABLE_COL_DESCRIPTION,
    );

    if let Some(details) = row.as_task().and_then(|t| t.hunt_details()) {
        println!(
            "{:<width_id$}   weapon: {}  stats: {}  ephemera: {}",
            "",
            details.weapon,
            details.stats,
            if details.has_ephemera { "yes" } else { "no" },
            width_id = TABLE_COL_ID,
        );
    }
}

fn selected_categories(only: Option<&str>) -> Vec<Category> {
    match only {
        Some("timed") => vec![Category::TimeSensitive],
        Some("untimed") => vec![Category::Regular],
        _ => Category::ALL.to_vec(),
    }
}

pub async fn run(profile: &str, args: ListArgs) -> Result<()> {
    let tracker = profile::open_tracker(profile)?;
    let categories = selected_categories(args.only.as_deref());

    if args.json {
        let collect = |category| {
            categories.contains(&category).then(|| {
                tracker
                    .rows(category)
                    .iter()
                    .map(RowJson::from)
                    .collect::<Vec<_>>()
            })
        };
        let output = ListJson {
            time_sensitive: collect(Category::TimeSensitive),
            non_time_sensitive: collect(Category::Regular),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Profile: {}", profile);
    for category in categories {
        let rows = tracker.rows(category);
        println!("\n═══ {} ═══\n", category.title());
        if rows.is_empty() {
            println!("  (no tasks)");
            continue;
        }
        print_table_header();
        for row in &rows {
            print_table_row(row);
        }
    }
    println!("\nTotal: {} tasks", tracker.tasks().len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::model::{seed_constant_tasks, seed_tasks};

    #[test]
    fn test_selected_categories() {
        assert_eq!(selected_categories(None), Category::ALL.to_vec());
        assert_eq!(selected_categories(Some("timed")), vec![Category::TimeSensitive]);
        assert_eq!(selected_categories(Some("untimed")), vec![Category::Regular]);
    }

    #[test]
    fn test_row_json() {
        let tasks = seed_tasks();
        let constants = seed_constant_tasks();

        let constant = RowJson::from(&Row::Constant(&constants[0]));
        assert!(constant.constant);
        assert_eq!(constant.task_type, "Incarnon Upgrade");

        let task = RowJson::from(&Row::Task(&tasks[1]));
        assert_eq!(task.id, "2");
        assert_eq!(task.task_type, "Mods");
        assert!(!task.constant);

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["type"], "Mods");
        assert!(value.get("huntDetails").is_none());
    }
}
