//! List presenter - derives the two display lists from the stores

use std::fmt;

use super::model::{ConstantTask, Interest, Task};

/// Which of the two lists a task is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TimeSensitive,
    Regular,
}

impl Category {
    pub const ALL: [Category; 2] = [Self::TimeSensitive, Self::Regular];

    pub fn of(task: &Task) -> Self {
        Self::from_flag(task.time_sensitive)
    }

    pub fn from_flag(time_sensitive: bool) -> Self {
        if time_sensitive {
            Self::TimeSensitive
        } else {
            Self::Regular
        }
    }

    pub fn is_time_sensitive(&self) -> bool {
        matches!(self, Self::TimeSensitive)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::TimeSensitive => "Time Sensitive Tasks",
            Self::Regular => "Non-Time Sensitive Tasks",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::TimeSensitive => Self::Regular,
            Self::Regular => Self::TimeSensitive,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Constant(&'a ConstantTask),
    Task(&'a Task),
}

impl<'a> Row<'a> {
    pub fn as_task(&self) -> Option<&'a Task> {
        match self {
            Row::Task(task) => Some(task),
            Row::Constant(_) => None,
        }
    }

    pub fn description(&self) -> &'a str {
        match self {
            Row::Task(task) => &task.description,
            Row::Constant(task) => &task.description,
        }
    }
}

/// Stable interest sort over a copy: high before low, ties keep input order.
pub fn sort_by_interest<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut sorted: Vec<&Task> = tasks.into_iter().collect();
    sorted.sort_by_key(|t| match t.interest {
        Interest::High => 0,
        Interest::Low => 1,
    });
    sorted
}

/// Tasks of one category in display order. The store order is left as is.
pub fn present(tasks: &[Task], category: Category) -> Vec<&Task> {
    sort_by_interest(tasks.iter().filter(|t| Category::of(t) == category))
}

/// Display rows for a list: for the time-sensitive list the constant tasks
/// come first, unsorted, followed by the sorted regular tasks.
pub fn rows<'a>(tasks: &'a [Task], constants: &'a [ConstantTask], category: Category) -> Vec<Row<'a>> {
    let mut rows: Vec<Row<'a>> = Vec::new();
    if category.is_time_sensitive() {
        rows.extend(constants.iter().map(Row::Constant));
    }
    rows.extend(present(tasks, category).into_iter().map(Row::Task));
    rows
}
