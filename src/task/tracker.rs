//! Tracker - both stores behind one persistence port

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::backup::{Backup, BackupError};
use super::store::{ConstantTaskStore, TaskStore};
use super::view::{self, Category, Row};
use crate::storage::{KeyValueStore, Result};

/// What an import replaced; `None` for a store the backup did not mention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub tasks: Option<usize>,
    pub constant_tasks: Option<usize>,
}

pub struct Tracker<S> {
    tasks: TaskStore<S>,
    constants: ConstantTaskStore<S>,
}

impl<S: KeyValueStore + Clone> Tracker<S> {
    pub fn load(port: S) -> Result<Self> {
        let tasks = TaskStore::load(port.clone())?;
        let constants = ConstantTaskStore::load(port)?;
        Ok(Self { tasks, constants })
    }
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn tasks(&self) -> &TaskStore<S> {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskStore<S> {
        &mut self.tasks
    }

    pub fn constants(&self) -> &ConstantTaskStore<S> {
        &self.constants
    }

    pub fn constants_mut(&mut self) -> &mut ConstantTaskStore<S> {
        &mut self.constants
    }

    pub fn rows(&self, category: Category) -> Vec<Row<'_>> {
        view::rows(self.tasks.tasks(), self.constants.tasks(), category)
    }

    pub fn export(&self) -> Backup {
        Backup::new(self.tasks.tasks(), self.constants.tasks())
    }

    /// Applies a backup. Validation runs first, so a rejected backup leaves
    /// both stores as they were. When writing the constant tasks fails after
    /// the tasks were replaced, the previous tasks are written back; if that
    /// write fails too the error is logged and the tasks stay imported.
    pub fn import(&mut self, backup: Backup) -> std::result::Result<ImportSummary, BackupError> {
        backup.validate()?;

        let previous_tasks = backup.tasks.as_ref().map(|_| self.tasks.tasks().to_vec());
        let mut summary = ImportSummary::default();
        if let Some(tasks) = backup.tasks {
            summary.tasks = Some(tasks.len());
            self.tasks.replace_all(tasks)?;
        }
        if let Some(constants) = backup.constant_tasks {
            summary.constant_tasks = Some(constants.len());
            if let Err(e) = self.constants.replace_all(constants) {
                if let Some(previous) = previous_tasks {
                    if let Err(rollback) = self.tasks.replace_all(previous) {
                        error!("Could not restore tasks after a failed import: {}", rollback);
                    }
                }
                return Err(e.into());
            }
        }
        Ok(summary)
    }

    /// Writes the export to `path`. A directory gets the default file name.
    pub fn export_to_file(&self, path: &Path) -> std::result::Result<PathBuf, BackupError> {
        let path = if path.is_dir() {
            path.join(super::backup::EXPORT_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        let content = self.export().to_json()?;
        fs::write(&path, content).map_err(|source| BackupError::Write {
            path: path.clone(),
            source,
        })?;
        info!("Exported tasks to {}", path.display());
        Ok(path)
    }

    pub fn import_from_file(&mut self, path: &Path) -> std::result::Result<ImportSummary, BackupError> {
        let content = fs::read_to_string(path).map_err(|source| BackupError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let summary = self.import(Backup::parse(&content)?)?;
        info!(
            "Imported {} from {}",
            describe_summary(&summary),
            path.display()
        );
        Ok(summary)
    }
}

pub fn describe_summary(summary: &ImportSummary) -> String {
    let mut parts = Vec::new();
    if let Some(n) = summary.tasks {
        parts.push(format!("{} tasks", n));
    }
    if let Some(n) = summary.constant_tasks {
        parts.push(format!("{} constant tasks", n));
    }
    if parts.is_empty() {
        "nothing".to_string()
    } else {
        parts.join(" and ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use crate::task::model::{Interest, NewTask, TaskKind};
    use crate::task::store::{CONSTANT_TASKS_KEY, TASKS_KEY};
    use tempfile::tempdir;

    /// Memory store whose writes to one key fail while `armed` is set.
    #[derive(Clone)]
    struct FailingStore {
        inner: MemoryStore,
        key: &'static str,
        armed: Arc<AtomicBool>,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if key == self.key && self.armed.load(Ordering::SeqCst) {
                return Err(StorageError::Write {
                    path: PathBuf::from(key),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.set(key, value)
        }
    }

    fn new_tracker() -> (MemoryStore, Tracker<MemoryStore>) {
        let port = MemoryStore::new();
        let tracker = Tracker::load(port.clone()).unwrap();
        (port, tracker)
    }

    #[test]
    fn test_export_import_roundtrip() {
        let (_, mut tracker) = new_tracker();
        tracker
            .tasks_mut()
            .add(NewTask {
                description: "Farm Forma".to_string(),
                interest: Interest::High,
                kind: TaskKind::Items,
                ..NewTask::default()
            })
            .unwrap();
        tracker.constants_mut().toggle_edit("incarnon-warframe").unwrap();
        tracker.tasks_mut().reorder(3, 0, true).unwrap();

        let tasks_before = tracker.tasks().tasks().to_vec();
        let constants_before = tracker.constants().tasks().to_vec();
        let exported = tracker.export();

        // Mutate, then restore
        tracker.tasks_mut().remove(tasks_before[0].id).unwrap();
        tracker.constants_mut().toggle_edit("incarnon-warframe").unwrap();
        tracker.import(exported).unwrap();

        assert_eq!(tracker.tasks().tasks(), tasks_before.as_slice());
        assert_eq!(tracker.constants().tasks(), constants_before.as_slice());
    }

    #[test]
    fn test_import_only_replaces_present_keys() {
        let (port, mut tracker) = new_tracker();
        let backup = Backup::parse(r#"{"tasks": []}"#).unwrap();

        let summary = tracker.import(backup).unwrap();

        assert_eq!(summary, ImportSummary { tasks: Some(0), constant_tasks: None });
        assert!(tracker.tasks().is_empty());
        assert_eq!(tracker.constants().tasks().len(), 2);
        assert!(port.contains(TASKS_KEY));
        assert!(!port.contains(CONSTANT_TASKS_KEY));
    }

    #[test]
    fn test_import_invalid_backup_changes_nothing() {
        let (port, mut tracker) = new_tracker();
        let mut backup = tracker.export();
        if let Some(tasks) = backup.tasks.as_mut() {
            tasks[0].description.clear();
        }
        backup.constant_tasks = Some(Vec::new());

        assert!(tracker.import(backup).is_err());
        assert_eq!(tracker.tasks().len(), 3);
        assert_eq!(tracker.constants().tasks().len(), 2);
        assert!(!port.contains(TASKS_KEY));
        assert!(!port.contains(CONSTANT_TASKS_KEY));
    }

    #[test]
    fn test_file_roundtrip() {
        let temp = tempdir().unwrap();
        let (_, mut tracker) = new_tracker();

        let written = tracker.export_to_file(temp.path()).unwrap();
        assert_eq!(written, temp.path().join("warframe-tasks.json"));

        let (_, mut other) = new_tracker();
        other.tasks_mut().replace_all(Vec::new()).unwrap();
        let summary = other.import_from_file(&written).unwrap();

        assert_eq!(summary.tasks, Some(3));
        assert_eq!(other.tasks().tasks(), tracker.tasks().tasks());
        assert_eq!(describe_summary(&summary), "3 tasks and 2 constant tasks");

        // Importing its own export is a no-op
        tracker.import_from_file(&written).unwrap();
        assert_eq!(tracker.tasks().len(), 3);
    }

    #[test]
    fn test_import_from_missing_file() {
        let temp = tempdir().unwrap();
        let (_, mut tracker) = new_tracker();
        let err = tracker
            .import_from_file(&temp.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, BackupError::Read { .. }));
    }

    #[test]
    fn test_rows_use_both_stores() {
        let (_, tracker) = new_tracker();
        assert_eq!(tracker.rows(Category::TimeSensitive).len(), 2);
        assert_eq!(tracker.rows(Category::Regular).len(), 3);
    }

    #[test]
    fn test_describe_empty_summary() {
        assert_eq!(describe_summary(&ImportSummary::default()), "nothing");
    }

    #[test]
    fn test_failed_import_write_restores_tasks() {
        let port = FailingStore {
            inner: MemoryStore::new(),
            key: CONSTANT_TASKS_KEY,
            armed: Arc::new(AtomicBool::new(false)),
        };
        let mut tracker = Tracker::load(port.clone()).unwrap();
        tracker.tasks_mut().add(NewTask::new("keep me")).unwrap();
        let tasks_before = tracker.tasks().tasks().to_vec();
        let stored_before = port.get(TASKS_KEY).unwrap();

        let mut backup = tracker.export();
        backup.tasks = Some(Vec::new());
        port.armed.store(true, Ordering::SeqCst);

        let err = tracker.import(backup).unwrap_err();
        assert!(matches!(err, BackupError::Storage(StorageError::Write { .. })));
        assert_eq!(tracker.tasks().tasks(), tasks_before.as_slice());
        assert_eq!(port.get(TASKS_KEY).unwrap(), stored_before);
        assert_eq!(tracker.constants().tasks().len(), 2);
    }

    #[test]
    fn test_blank_constant_edit_keeps_export_importable() {
        let (_, mut tracker) = new_tracker();
        let constants = tracker.constants_mut();
        constants.toggle_edit("incarnon-weapon").unwrap();
        constants.set_description("incarnon-weapon", "").unwrap();
        constants.toggle_edit("incarnon-weapon").unwrap();

        let json = tracker.export().to_json().unwrap();
        let backup = Backup::parse(&json).unwrap();
        let constants_before = tracker.constants().tasks().to_vec();
        tracker.import(backup).unwrap();
        assert_eq!(tracker.constants().tasks(), constants_before.as_slice());
    }
}
