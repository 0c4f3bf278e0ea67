//! Task tracking core
//!
//! - Task and constant task records
//! - Stores that mirror every change to a key/value port
//! - Display lists, the draft form, drag reordering and backups

pub mod backup;
pub mod draft;
pub mod locations;
pub mod model;
pub mod reorder;
pub mod store;
pub mod tracker;
pub mod view;

pub use backup::{Backup, BackupError, EXPORT_FILE_NAME};
pub use draft::DraftTask;
pub use model::{ConstantTask, HuntDetails, Interest, NewTask, Task, TaskId, TaskKind, TaskType};
pub use reorder::{DragOutcome, DragPayload, DropSide, DropTarget, ReorderEngine, ReorderError};
pub use store::{ConstantTaskStore, TaskStore, CONSTANT_TASKS_KEY, TASKS_KEY};
pub use tracker::{describe_summary, ImportSummary, Tracker};
pub use view::{Category, Row};
