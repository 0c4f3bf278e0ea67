//! Task stores - ordered collections mirrored to a key/value port
//!
//! Each store loads once from its key (falling back to the seed list) and
//! rewrites the full collection after every mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::model::{seed_constant_tasks, seed_tasks, ConstantTask, IdGenerator, NewTask, Task, TaskId};
use crate::storage::{KeyValueStore, Result, StorageError};

pub const TASKS_KEY: &str = "tasks";
pub const CONSTANT_TASKS_KEY: &str = "constantTasks";

fn load_or_seed<S, T>(port: &S, key: &str, seed: fn() -> Vec<T>) -> Result<Vec<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match port.get(key)? {
        Some(content) => {
            serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            })
        }
        None => {
            debug!("Nothing stored under '{}', using seed data", key);
            Ok(seed())
        }
    }
}

fn persist<S, T>(port: &S, key: &str, items: &[T]) -> Result<()>
where
    S: KeyValueStore,
    T: Serialize,
{
    let content = serde_json::to_string_pretty(items).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    port.set(key, &content)
}

pub struct TaskStore<S> {
    port: S,
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn load(port: S) -> Result<Self> {
        let tasks: Vec<Task> = load_or_seed(&port, TASKS_KEY, seed_tasks)?;
        let ids = IdGenerator::seeded(&tasks);
        Ok(Self { port, tasks, ids })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Appends a task under a fresh ID. Returns `None` without touching the
    /// store when the description is empty.
    pub fn add(&mut self, task: NewTask) -> Result<Option<TaskId>> {
        if task.description.is_empty() {
            debug!("Refusing to add task with empty description");
            return Ok(None);
        }

        let last = self.tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        let id = self.ids.next_id().ok_or(StorageError::IdsExhausted(last))?;
        self.tasks.push(task.into_task(id));
        self.save()?;
        Ok(Some(id))
    }

    /// Removes the task with `id`. Returns whether anything was removed;
    /// the collection is written either way.
    pub fn remove(&mut self, id: TaskId) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.save()?;
        Ok(self.tasks.len() != before)
    }

    /// Moves the task at `source` to `destination` and sets its category.
    ///
    /// `destination` indexes the sequence with the moved task already taken
    /// out, and is clamped to its end. An out-of-range `source` is a no-op.
    pub fn reorder(&mut self, source: usize, destination: usize, time_sensitive: bool) -> Result<bool> {
        if source >= self.tasks.len() {
            warn!(
                "Ignoring reorder from index {} in a list of {}",
                source,
                self.tasks.len()
            );
            return Ok(false);
        }

        let mut task = self.tasks.remove(source);
        task.time_sensitive = time_sensitive;
        let destination = destination.min(self.tasks.len());
        self.tasks.insert(destination, task);
        self.save()?;
        Ok(true)
    }

    /// Replaces the whole collection, as restoring a backup does. A failed
    /// write keeps the previous collection in memory.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> Result<()> {
        let previous = std::mem::replace(&mut self.tasks, tasks);
        if let Err(e) = self.save() {
            self.tasks = previous;
            return Err(e);
        }
        self.ids = IdGenerator::seeded(&self.tasks);
        Ok(())
    }

    fn save(&self) -> Result<()> {
        persist(&self.port, TASKS_KEY, &self.tasks)
    }
}

pub struct ConstantTaskStore<S> {
    port: S,
    tasks: Vec<ConstantTask>,
}

impl<S: KeyValueStore> ConstantTaskStore<S> {
    pub fn load(port: S) -> Result<Self> {
        let tasks = load_or_seed(&port, CONSTANT_TASKS_KEY, seed_constant_tasks)?;
        Ok(Self { port, tasks })
    }

    pub fn tasks(&self) -> &[ConstantTask] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&ConstantTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.get(id).is_some_and(|t| t.editing)
    }

    /// Flips edit mode for `id`. Unknown IDs are ignored.
    pub fn toggle_edit(&mut self, id: &str) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.editing = !task.editing;
        self.save()?;
        Ok(true)
    }

    /// Updates the description while the task is in edit mode. Blank text is
    /// refused and leaves the old description in place.
    pub fn set_description(&mut self, id: &str, text: &str) -> Result<bool> {
        if text.trim().is_empty() {
            debug!("Refusing blank description for constant task {}", id);
            return Ok(false);
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id && t.editing) else {
            return Ok(false);
        };
        task.description = text.to_string();
        self.save()?;
        Ok(true)
    }

    pub fn replace_all(&mut self, tasks: Vec<ConstantTask>) -> Result<()> {
        let previous = std::mem::replace(&mut self.tasks, tasks);
        if let Err(e) = self.save() {
            self.tasks = previous;
            return Err(e);
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        persist(&self.port, CONSTANT_TASKS_KEY, &self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::task::model::{Interest, TaskKind};

    fn empty_store() -> (MemoryStore, TaskStore<MemoryStore>) {
        let port = MemoryStore::new();
        port.set(TASKS_KEY, "[]").unwrap();
        let store = TaskStore::load(port.clone()).unwrap();
        (port, store)
    }

    fn stored_tasks(port: &MemoryStore) -> Vec<Task> {
        serde_json::from_str(&port.get(TASKS_KEY).unwrap().unwrap()).unwrap()
    }

    fn add(store: &mut TaskStore<MemoryStore>, description: &str) -> TaskId {
        store.add(NewTask::new(description)).unwrap().unwrap()
    }

    #[test]
    fn test_load_seeds_when_nothing_stored() {
        let port = MemoryStore::new();
        let store = TaskStore::load(port.clone()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.tasks()[0].description, "Farm Meso N11 Relic for Nyx Prime Part");

        let constants = ConstantTaskStore::load(port).unwrap();
        assert_eq!(constants.tasks().len(), 2);
    }

    #[test]
    fn test_load_prefers_stored_tasks() {
        let (port, _) = empty_store();
        let store = TaskStore::load(port).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_value_is_an_error() {
        let port = MemoryStore::new();
        port.set(TASKS_KEY, "{not json").unwrap();
        let err = TaskStore::load(port).err().unwrap();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_add_appends_and_persists() {
        let (port, mut store) = empty_store();
        let task = NewTask {
            description: "Farm Forma".to_string(),
            time_sensitive: false,
            interest: Interest::High,
            location: String::new(),
            kind: TaskKind::Items,
        };

        let id = store.add(task).unwrap().unwrap();

        assert_eq!(store.len(), 1);
        let added = store.get(id).unwrap();
        assert_eq!(added.description, "Farm Forma");
        assert_eq!(added.interest, Interest::High);
        assert_eq!(stored_tasks(&port), store.tasks());
    }

    #[test]
    fn test_add_empty_description_is_refused() {
        let (port, mut store) = empty_store();
        port.set(TASKS_KEY, "untouched").unwrap();

        assert_eq!(store.add(NewTask::new("")).unwrap(), None);
        assert!(store.is_empty());
        assert_eq!(port.get(TASKS_KEY).unwrap().as_deref(), Some("untouched"));
    }

    #[test]
    fn test_added_task_appears_exactly_once() {
        let (_, mut store) = empty_store();
        let ids: Vec<TaskId> = ["a", "b", "c", "d"].iter().map(|d| add(&mut store, d)).collect();

        for id in &ids {
            assert_eq!(store.tasks().iter().filter(|t| t.id == *id).count(), 1);
        }
        let mut unique = ids.clone();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_ids_stay_unique_after_seed_data() {
        let port = MemoryStore::new();
        let mut store = TaskStore::load(port).unwrap();
        let id = add(&mut store, "new");
        assert!(store.tasks().iter().filter(|t| t.id == id).count() == 1);
        assert!(id > TaskId(3));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (port, mut store) = empty_store();
        let keep = add(&mut store, "keep");
        let gone = add(&mut store, "gone");

        assert!(store.remove(gone).unwrap());
        let after_first = store.tasks().to_vec();

        assert!(!store.remove(gone).unwrap());
        assert_eq!(store.tasks(), after_first.as_slice());
        assert_eq!(store.tasks()[0].id, keep);
        assert_eq!(stored_tasks(&port), after_first);
    }

    #[test]
    fn test_reorder_moves_and_sets_category() {
        let (port, mut store) = empty_store();
        let ids: Vec<TaskId> = ["a", "b", "c", "d", "e"].iter().map(|d| add(&mut store, d)).collect();

        assert!(store.reorder(3, 0, true).unwrap());

        let order: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(order, vec![ids[3], ids[0], ids[1], ids[2], ids[4]]);
        assert!(store.get(ids[3]).unwrap().time_sensitive);
        assert_eq!(stored_tasks(&port), store.tasks());
    }

    #[test]
    fn test_reorder_keeps_count_and_id_set() {
        let (_, mut store) = empty_store();
        for d in ["a", "b", "c", "d"] {
            add(&mut store, d);
        }
        let mut before: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();

        for (source, destination, ts) in [(0, 3, true), (3, 1, false), (2, 2, true), (1, 99, false)] {
            store.reorder(source, destination, ts).unwrap();
            let moved = if destination >= store.len() { store.len() - 1 } else { destination };
            assert_eq!(store.tasks()[moved].time_sensitive, ts);
        }

        let mut after: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reorder_out_of_range_source_is_noop() {
        let (_, mut store) = empty_store();
        add(&mut store, "only");
        let before = store.tasks().to_vec();
        assert!(!store.reorder(5, 0, true).unwrap());
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_replace_all_persists() {
        let (port, mut store) = empty_store();
        store.replace_all(seed_tasks()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(stored_tasks(&port), seed_tasks());

        let id = add(&mut store, "after restore");
        assert!(id > TaskId(3));
    }

    #[test]
    fn test_toggle_edit_flips_and_persists() {
        let port = MemoryStore::new();
        let mut constants = ConstantTaskStore::load(port.clone()).unwrap();

        assert!(constants.toggle_edit("incarnon-weapon").unwrap());
        assert!(constants.is_editing("incarnon-weapon"));
        assert!(!constants.is_editing("incarnon-warframe"));

        let stored: Vec<ConstantTask> =
            serde_json::from_str(&port.get(CONSTANT_TASKS_KEY).unwrap().unwrap()).unwrap();
        assert!(stored[0].editing);

        assert!(constants.toggle_edit("incarnon-weapon").unwrap());
        assert!(!constants.is_editing("incarnon-weapon"));
    }

    #[test]
    fn test_toggle_edit_unknown_id_is_ignored() {
        let port = MemoryStore::new();
        let mut constants = ConstantTaskStore::load(port.clone()).unwrap();
        assert!(!constants.toggle_edit("nope").unwrap());
        assert!(!port.contains(CONSTANT_TASKS_KEY));
    }

    #[test]
    fn test_set_description_requires_edit_mode() {
        let port = MemoryStore::new();
        let mut constants = ConstantTaskStore::load(port).unwrap();

        assert!(!constants.set_description("incarnon-weapon", "Torid").unwrap());
        assert_eq!(constants.get("incarnon-weapon").unwrap().description, "Incarnon (Weapon)");

        constants.toggle_edit("incarnon-weapon").unwrap();
        assert!(constants.set_description("incarnon-weapon", "Incarnon: Torid").unwrap());
        constants.toggle_edit("incarnon-weapon").unwrap();

        let task = constants.get("incarnon-weapon").unwrap();
        assert_eq!(task.description, "Incarnon: Torid");
        assert!(!task.editing);
    }

    #[test]
    fn test_add_after_largest_id_is_an_error() {
        let (port, mut store) = empty_store();
        let mut tasks = seed_tasks();
        tasks[0].id = TaskId(u64::MAX);
        store.replace_all(tasks).unwrap();
        let before = port.get(TASKS_KEY).unwrap();

        let err = store.add(NewTask::new("next")).unwrap_err();
        assert!(matches!(err, StorageError::IdsExhausted(u64::MAX)));
        assert_eq!(store.len(), 3);
        assert_eq!(port.get(TASKS_KEY).unwrap(), before);
    }

    #[test]
    fn test_set_description_refuses_blank_text() {
        let port = MemoryStore::new();
        let mut constants = ConstantTaskStore::load(port).unwrap();
        constants.toggle_edit("incarnon-weapon").unwrap();

        assert!(!constants.set_description("incarnon-weapon", "").unwrap());
        assert!(!constants.set_description("incarnon-weapon", "   ").unwrap());
        assert_eq!(constants.get("incarnon-weapon").unwrap().description, "Incarnon (Weapon)");
        assert!(constants.is_editing("incarnon-weapon"));
    }
}
