//! Task store trait.
//!
//! The seam between the repository and whatever holds the documents. The
//! production implementation is [`MongoStore`](crate::db::mongo::MongoStore);
//! [`MemoryStore`](crate::db::memory::MemoryStore) backs the test suite.
//!
//! Reads report absence as `Ok(None)` and deletes as `Ok(false)` — turning
//! absence into an error is repository policy, not store behavior.

use crate::libs::error::Result;
use crate::libs::repository::BulkMode;
use crate::libs::task::{Task, TaskFilter, TaskPatch};
use async_trait::async_trait;

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist one task.
    async fn insert(&self, task: &Task) -> Result<()>;

    /// Persist a batch of tasks. Under [`BulkMode::Atomic`] the batch stops
    /// at the first failure; under [`BulkMode::BestEffort`] the store keeps
    /// inserting past individual failures.
    async fn insert_many(&self, tasks: &[Task], mode: BulkMode) -> Result<()>;

    /// Fetch one task by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>>;

    /// Fetch all tasks matching the filter, oldest first.
    async fn find(&self, filter: &TaskFilter) -> Result<Vec<Task>>;

    /// Apply a patch to one task in a single write and return the task as it
    /// is afterwards, or `None` if the id no longer exists.
    async fn apply(&self, id: &str, patch: &TaskPatch) -> Result<Option<Task>>;

    /// Remove one task; reports whether a document was actually removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}
