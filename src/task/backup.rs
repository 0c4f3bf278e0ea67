//! Backup and restore of both stores as a single JSON document
//!
//! The document shape is `{"tasks": [...], "constantTasks": [...]}`. Either
//! key may be missing from an imported file, in which case that store is left
//! alone. Everything present is validated before anything is applied.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

use super::model::{ConstantTask, Task, TaskId, MAX_TASK_ID};
use crate::storage::StorageError;

pub const EXPORT_FILE_NAME: &str = "warframe-tasks.json";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Backup is not valid JSON for a task backup: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Backup contains task id {0} more than once")]
    DuplicateTaskId(TaskId),

    #[error("Backup task id {0} is out of range")]
    TaskIdOutOfRange(TaskId),

    #[error("Backup contains constant task '{0}' more than once")]
    DuplicateConstantId(String),

    #[error("Backup task {0} has an empty description")]
    EmptyDescription(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_tasks: Option<Vec<ConstantTask>>,
}

impl Backup {
    pub fn new(tasks: &[Task], constant_tasks: &[ConstantTask]) -> Self {
        Self {
            tasks: Some(tasks.to_vec()),
            constant_tasks: Some(constant_tasks.to_vec()),
        }
    }

    /// Parses and validates a backup document.
    pub fn parse(content: &str) -> Result<Self, BackupError> {
        let backup: Backup = serde_json::from_str(content)?;
        backup.validate()?;
        Ok(backup)
    }

    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks what serde cannot: unique IDs in range and non-empty
    /// descriptions.
    pub fn validate(&self) -> Result<(), BackupError> {
        if let Some(tasks) = &self.tasks {
            let mut seen = HashSet::new();
            for task in tasks {
                if task.id.0 > MAX_TASK_ID {
                    return Err(BackupError::TaskIdOutOfRange(task.id));
                }
                if !seen.insert(task.id) {
                    return Err(BackupError::DuplicateTaskId(task.id));
                }
                if task.description.is_empty() {
                    return Err(BackupError::EmptyDescription(task.id.to_string()));
                }
            }
        }

        if let Some(constants) = &self.constant_tasks {
            let mut seen = HashSet::new();
            for task in constants {
                if !seen.insert(task.id.as_str()) {
                    return Err(BackupError::DuplicateConstantId(task.id.clone()));
                }
                if task.description.is_empty() {
                    return Err(BackupError::EmptyDescription(task.id.clone()));
                }
            }
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_none() && self.constant_tasks.is_none()
    }
}
