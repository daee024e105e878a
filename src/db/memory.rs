//! In-memory task store.
//!
//! Keeps tasks in an insertion-ordered `Vec` behind an async lock, which is
//! exactly the ordering the MongoDB store produces with its `created_at`
//! sort. Used by the test suite to exercise every repository operation
//! without a running server.

use crate::db::store::TaskStore;
use crate::libs::error::Result;
use crate::libs::repository::BulkMode;
use crate::libs::task::{Task, TaskFilter, TaskPatch};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    tasks: RwLock<Vec<Task>>,
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert(&self, task: &Task) -> Result<()> {
        self.tasks.write().await.push(task.clone());
        Ok(())
    }

    async fn insert_many(&self, tasks: &[Task], _mode: BulkMode) -> Result<()> {
        // Memory inserts cannot fail per item, so both modes behave the same.
        self.tasks.write().await.extend_from_slice(tasks);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn find(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().filter(|task| filter.matches(task)).cloned().collect())
    }

    async fn apply(&self, id: &str, patch: &TaskPatch) -> Result<Option<Task>> {
        let mut tasks = self.tasks.write().await;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        task.updated_at = patch.updated_at;
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        Ok(tasks.len() < before)
    }
}
