//! Draft task builder - the uncommitted task behind the "add task" form

use super::model::{HuntDetails, Interest, NewTask, TaskId, TaskKind, TaskType};
use super::store::TaskStore;
use crate::storage::{KeyValueStore, Result};

/// Form state for a task that has not been added yet. Hunt details are kept
/// while the type is switched around and only attached when committing a hunt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftTask {
    pub description: String,
    pub time_sensitive: bool,
    pub interest: Interest,
    pub location: String,
    pub task_type: TaskType,
    pub hunt_details: HuntDetails,
}

impl DraftTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_time_sensitive(&mut self, time_sensitive: bool) -> &mut Self {
        self.time_sensitive = time_sensitive;
        self
    }

    pub fn set_interest(&mut self, interest: Interest) -> &mut Self {
        self.interest = interest;
        self
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.location = location.into();
        self
    }

    pub fn set_type(&mut self, task_type: TaskType) -> &mut Self {
        self.task_type = task_type;
        self
    }

    pub fn set_weapon(&mut self, weapon: impl Into<String>) -> &mut Self {
        self.hunt_details.weapon = weapon.into();
        self
    }

    pub fn set_stats(&mut self, stats: impl Into<String>) -> &mut Self {
        self.hunt_details.stats = stats.into();
        self
    }

    pub fn set_has_ephemera(&mut self, has_ephemera: bool) -> &mut Self {
        self.hunt_details.has_ephemera = has_ephemera;
        self
    }

    pub fn is_committable(&self) -> bool {
        !self.description.is_empty()
    }

    pub fn to_new_task(&self) -> NewTask {
        NewTask {
            description: self.description.clone(),
            time_sensitive: self.time_sensitive,
            interest: self.interest,
            location: self.location.clone(),
            kind: TaskKind::new(self.task_type, self.hunt_details.clone()),
        }
    }

    /// Adds the draft to `store` and resets the form. An empty description
    /// leaves both the store and the draft untouched and returns `None`.
    pub fn commit<S: KeyValueStore>(&mut self, store: &mut TaskStore<S>) -> Result<Option<TaskId>> {
        if !self.is_committable() {
            return Ok(None);
        }

        let id = store.add(self.to_new_task())?;
        if id.is_some() {
            *self = Self::default();
        }
        Ok(id)
    }
}
