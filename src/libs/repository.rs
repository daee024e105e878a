//! Task repository: the mediator between CLI intents and the store.
//!
//! Every write is validated here before it reaches the store, timestamps are
//! assigned here, and store-level absence (`None` / `false`) is turned into
//! [`TaskError::NotFound`] here. Each operation is a single round trip; the
//! repository keeps no state of its own between calls.

use crate::db::store::TaskStore;
use crate::libs::error::{Result, TaskError};
use crate::libs::task::{validate, NewTask, Task, TaskChanges, TaskFilter, TaskPatch};

/// Insert policy for bulk creation.
///
/// Validation is always all-or-nothing before any write; the mode only
/// governs the insert phase once every draft has passed the field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkMode {
    /// Stop the batch at the first store failure.
    Atomic,
    /// Keep inserting the remaining tasks past individual failures.
    BestEffort,
}

pub struct TaskRepository<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate and persist a new task, returning it with its assigned id,
    /// defaults, and timestamps.
    pub async fn create(&self, draft: NewTask) -> Result<Task> {
        validate(&draft.as_changes())?;
        let task = Task::new(draft);
        self.store.insert(&task).await?;
        Ok(task)
    }

    /// Create many tasks in one batch. Any invalid draft fails the whole
    /// batch before a single document is written.
    pub async fn create_bulk(&self, drafts: Vec<NewTask>, mode: BulkMode) -> Result<Vec<Task>> {
        let mut tasks = Vec::with_capacity(drafts.len());
        for draft in drafts {
            validate(&draft.as_changes())?;
            tasks.push(Task::new(draft));
        }
        if tasks.is_empty() {
            return Ok(tasks);
        }
        self.store.insert_many(&tasks, mode).await?;
        Ok(tasks)
    }

    /// All tasks matching the filter, in creation order.
    pub async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        self.store.find(filter).await
    }

    pub async fn get(&self, id: &str) -> Result<Task> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Apply a partial update. Supplied fields are re-validated with the
    /// same rules as `create`; an empty change set just returns the task.
    /// Absence is checked at write time, so a task deleted by a concurrent
    /// invocation still reports `NotFound` rather than a stale success.
    pub async fn update(&self, id: &str, changes: TaskChanges) -> Result<Task> {
        if changes.is_empty() {
            return self.get(id).await;
        }
        validate(&changes)?;
        let patch = TaskPatch::from_changes(changes);
        self.store
            .apply(id, &patch)
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Mark a task completed. Idempotent: completing an already-completed
    /// task succeeds and leaves the flag set.
    pub async fn complete(&self, id: &str) -> Result<Task> {
        self.store
            .apply(id, &TaskPatch::completed())
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Remove a task. Deleting an id that does not exist reports `NotFound`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(TaskError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
