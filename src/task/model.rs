//! Task data model

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric task ID. New IDs are millisecond timestamps, bumped past the
/// previous ID when two tasks are created within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse().ok().map(Self)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interest level; high interest tasks sort first and get a filled star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    High,
    #[default]
    Low,
}

impl Interest {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" => Some(Self::High),
            "low" | "l" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::High => "★",
            Self::Low => "☆",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Task type tag without its detail payload. Used wherever a type is picked
/// before the details are known (forms, CLI flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskType {
    #[default]
    PrimeParts,
    Mods,
    Items,
    Hunts,
}

impl TaskType {
    pub const ALL: [TaskType; 4] = [Self::PrimeParts, Self::Mods, Self::Items, Self::Hunts];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "prime parts" | "prime" | "primeparts" => Some(Self::PrimeParts),
            "mods" | "mod" => Some(Self::Mods),
            "items" | "item" => Some(Self::Items),
            "hunts" | "hunt" => Some(Self::Hunts),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PrimeParts => "Prime Parts",
            Self::Mods => "Mods",
            Self::Items => "Items",
            Self::Hunts => "Hunts",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuntDetails {
    #[serde(default)]
    pub weapon: String,
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub has_ephemera: bool,
}

/// Task type together with its type-specific payload. Serialized inline into
/// the task record as `"type"` plus, for hunts, `"huntDetails"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskKind {
    #[default]
    #[serde(rename = "Prime Parts")]
    PrimeParts,
    Mods,
    Items,
    Hunts {
        #[serde(rename = "huntDetails", default)]
        hunt_details: HuntDetails,
    },
}

impl TaskKind {
    pub fn new(task_type: TaskType, hunt_details: HuntDetails) -> Self {
        match task_type {
            TaskType::PrimeParts => Self::PrimeParts,
            TaskType::Mods => Self::Mods,
            TaskType::Items => Self::Items,
            TaskType::Hunts => Self::Hunts { hunt_details },
        }
    }

    pub fn task_type(&self) -> TaskType {
        match self {
            Self::PrimeParts => TaskType::PrimeParts,
            Self::Mods => TaskType::Mods,
            Self::Items => TaskType::Items,
            Self::Hunts { .. } => TaskType::Hunts,
        }
    }

    pub fn hunt_details(&self) -> Option<&HuntDetails> {
        match self {
            Self::Hunts { hunt_details } => Some(hunt_details),
            _ => None,
        }
    }
}

/// A tracked objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub time_sensitive: bool,
    pub interest: Interest,
    #[serde(default)]
    pub location: String,
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    pub fn task_type(&self) -> TaskType {
        self.kind.task_type()
    }

    pub fn hunt_details(&self) -> Option<&HuntDetails> {
        self.kind.hunt_details()
    }
}

/// Task fields before an ID has been assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub description: String,
    pub time_sensitive: bool,
    pub interest: Interest,
    pub location: String,
    pub kind: TaskKind,
}

impl NewTask {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            description: self.description,
            time_sensitive: self.time_sensitive,
            interest: self.interest,
            location: self.location,
            kind: self.kind,
        }
    }
}

/// A fixed recurring objective. Always shown in the time-sensitive list;
/// its description can be edited but it cannot be removed or moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantTask {
    pub id: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub time_sensitive: bool,
    pub interest: Interest,
    #[serde(default)]
    pub location: String,
    /// Free-form category shown next to the star, e.g. "Incarnon Upgrade".
    #[serde(rename = "type")]
    pub label: String,
    #[serde(default)]
    pub editing: bool,
}

fn default_true() -> bool {
    true
}

/// Largest ID a backup may carry: the largest integer a JSON number holds
/// exactly.
pub const MAX_TASK_ID: u64 = (1 << 53) - 1;

/// Hands out task IDs that never repeat within a store, even when the clock
/// does not advance between calls.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a Task>) -> Self {
        let last = existing.into_iter().map(|t| t.id.0).max().unwrap_or(0);
        Self { last }
    }

    /// `None` once the largest possible ID has been handed out.
    pub fn next_id(&mut self) -> Option<TaskId> {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last = now.max(self.last.checked_add(1)?);
        Some(TaskId(self.last))
    }
}

pub fn seed_tasks() -> Vec<Task> {
    let seed = |id, description: &str, interest, location: &str, kind| Task {
        id: TaskId(id),
        description: description.to_string(),
        time_sensitive: false,
        interest,
        location: location.to_string(),
        kind,
    };

    vec![
        seed(
            1,
            "Farm Meso N11 Relic for Nyx Prime Part",
            Interest::Low,
            "Railjack",
            TaskKind::PrimeParts,
        ),
        seed(
            2,
            "Farm Tek Assault for Kavat Mod",
            Interest::High,
            "Deimos",
            TaskKind::Mods,
        ),
        seed(
            3,
            "Add Somachord Pop Songs",
            Interest::High,
            "Various",
            TaskKind::Items,
        ),
    ]
}

pub fn seed_constant_tasks() -> Vec<ConstantTask> {
    let seed = |id: &str, description: &str, label: &str| ConstantTask {
        id: id.to_string(),
        description: description.to_string(),
        time_sensitive: true,
        interest: Interest::High,
        location: "Duviri".to_string(),
        label: label.to_string(),
        editing: false,
    };

    vec![
        seed("incarnon-weapon", "Incarnon (Weapon)", "Incarnon Upgrade"),
        seed("incarnon-warframe", "Incarnon (Warframe)", "Base Frame"),
    ]
}
