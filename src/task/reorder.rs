//! Reorder engine - drag gesture state machine over the task store
//!
//! A drag captures the dragged task's ID and its index in the store as a
//! text payload, the same way a drag-and-drop transfer would carry it. While
//! dragging, the hovered row and the side of its midpoint the pointer is on
//! pick the drop position. Releasing resolves that position against the store
//! with the dragged task taken out, then calls [`TaskStore::reorder`].
//!
//! Every release, successful or not, returns the engine to idle so no drag
//! highlight can get stuck on screen.

use thiserror::Error;
use tracing::{debug, warn};

use super::model::{Task, TaskId};
use super::store::TaskStore;
use super::view::Category;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    #[error("Malformed drag payload: {0:?}")]
    MalformedPayload(String),

    #[error("Task {task_id} is no longer at index {index}")]
    StaleSource { task_id: TaskId, index: usize },

    #[error("Drop target {0} not found")]
    UnknownTarget(TaskId),
}

/// Which side of the hovered row the task will land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSide {
    Before,
    After,
}

impl DropSide {
    /// Before when the centre of the pointer's line is above the row's
    /// vertical midpoint. The middle line of an odd-height row counts as After.
    pub fn from_midpoint(pointer_y: u16, row_top: u16, row_height: u16) -> Self {
        let offset = u32::from(pointer_y.saturating_sub(row_top));
        if offset * 2 + 1 < u32::from(row_height) {
            Self::Before
        } else {
            Self::After
        }
    }
}

/// Drag transfer data: `"<task id>:<store index>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub task_id: TaskId,
    pub source_index: usize,
}

impl DragPayload {
    pub fn encode(&self) -> String {
        format!("{}:{}", self.task_id, self.source_index)
    }

    pub fn parse(data: &str) -> Result<Self, ReorderError> {
        let malformed = || ReorderError::MalformedPayload(data.to_string());
        let (id, index) = data.split_once(':').ok_or_else(malformed)?;
        let task_id = TaskId::parse(id).ok_or_else(malformed)?;
        let source_index = index.trim().parse().map_err(|_| malformed())?;
        Ok(Self {
            task_id,
            source_index,
        })
    }
}

/// Where a dragged task would land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub category: Category,
    /// Hovered task and side; `None` means the empty area of the list.
    pub anchor: Option<(TaskId, DropSide)>,
}

impl DropTarget {
    pub fn on_task(category: Category, task_id: TaskId, side: DropSide) -> Self {
        Self {
            category,
            anchor: Some((task_id, side)),
        }
    }

    pub fn end_of(category: Category) -> Self {
        Self {
            category,
            anchor: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        payload: String,
        hover: Option<DropTarget>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Committed {
        task_id: TaskId,
        from: usize,
        to: usize,
        category: Category,
    },
    Cancelled,
}

/// Store index the dragged task should be re-inserted at, counted in the
/// sequence with the dragged task removed.
pub fn resolve_destination(
    tasks: &[Task],
    payload: DragPayload,
    target: DropTarget,
) -> Result<usize, ReorderError> {
    match tasks.get(payload.source_index) {
        Some(task) if task.id == payload.task_id => {}
        _ => {
            return Err(ReorderError::StaleSource {
                task_id: payload.task_id,
                index: payload.source_index,
            })
        }
    }

    let Some((anchor_id, side)) = target.anchor else {
        return Ok(tasks.len() - 1);
    };

    if anchor_id == payload.task_id {
        return Ok(payload.source_index);
    }

    let anchor = tasks
        .iter()
        .position(|t| t.id == anchor_id)
        .ok_or(ReorderError::UnknownTarget(anchor_id))?;
    let anchor = if anchor > payload.source_index {
        anchor - 1
    } else {
        anchor
    };

    Ok(match side {
        DropSide::Before => anchor,
        DropSide::After => anchor + 1,
    })
}

#[derive(Debug, Default)]
pub struct ReorderEngine {
    state: DragState,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// ID of the task being dragged, if the payload is readable.
    pub fn dragged_id(&self) -> Option<TaskId> {
        match &self.state {
            DragState::Dragging { payload, .. } => DragPayload::parse(payload).ok().map(|p| p.task_id),
            DragState::Idle => None,
        }
    }

    pub fn hover_target(&self) -> Option<DropTarget> {
        match &self.state {
            DragState::Dragging { hover, .. } => *hover,
            DragState::Idle => None,
        }
    }

    pub fn begin(&mut self, task_id: TaskId, source_index: usize) {
        self.begin_with_payload(
            DragPayload {
                task_id,
                source_index,
            }
            .encode(),
        );
    }

    /// Starts a drag from raw transfer data. The payload is only checked on
    /// release.
    pub fn begin_with_payload(&mut self, payload: String) {
        debug!("Drag started with payload {}", payload);
        self.state = DragState::Dragging {
            payload,
            hover: None,
        };
    }

    /// Updates the hovered drop target. Ignored while idle.
    pub fn hover(&mut self, target: Option<DropTarget>) {
        if let DragState::Dragging { hover, .. } = &mut self.state {
            *hover = target;
        }
    }

    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Ends the drag. Commits the move when the pointer is over a valid
    /// target; bad payloads and stale positions are logged and cancel.
    pub fn release<S: KeyValueStore>(
        &mut self,
        store: &mut TaskStore<S>,
    ) -> Result<DragOutcome, StorageError> {
        let DragState::Dragging { payload, hover } = std::mem::take(&mut self.state) else {
            return Ok(DragOutcome::Cancelled);
        };

        let Some(target) = hover else {
            debug!("Drag released outside any list");
            return Ok(DragOutcome::Cancelled);
        };

        let resolved = DragPayload::parse(&payload).and_then(|payload| {
            resolve_destination(store.tasks(), payload, target).map(|to| (payload, to))
        });
        let (payload, to) = match resolved {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!("Drop aborted: {}", e);
                return Ok(DragOutcome::Cancelled);
            }
        };

        store.reorder(
            payload.source_index,
            to,
            target.category.is_time_sensitive(),
        )?;
        Ok(DragOutcome::Committed {
            task_id: payload.task_id,
            from: payload.source_index,
            to,
            category: target.category,
        })
    }
}
