//! MongoDB-backed task store.
//!
//! Owns the connection bootstrap: one client per process invocation, built
//! from the configured connection URI and database name, dropped at process
//! exit. The `tasks` collection carries secondary indexes on the fields the
//! `list` filters touch.
//!
//! Documents are the serde image of [`Task`] (`id` renamed to `_id`), so the
//! same derives define the wire shape on both the write and the read path.

use crate::db::store::TaskStore;
use crate::libs::config::Config;
use crate::libs::error::{Result, TaskError};
use crate::libs::repository::BulkMode;
use crate::libs::task::{Task, TaskFilter, TaskPatch};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, IndexModel};
use serde::Serialize;

pub const TASKS_COLLECTION: &str = "tasks";

pub struct MongoStore {
    collection: Collection<Task>,
}

impl MongoStore {
    /// Connect to the configured deployment and prepare the `tasks`
    /// collection, creating the filter indexes if they are missing.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.connection_uri).await?;
        let collection = client.database(&config.database_name).collection::<Task>(TASKS_COLLECTION);

        let indexes = vec![
            IndexModel::builder().keys(doc! { "completed": 1 }).build(),
            IndexModel::builder().keys(doc! { "priority": 1 }).build(),
            IndexModel::builder().keys(doc! { "due_date": 1 }).build(),
        ];
        collection.create_indexes(indexes).await?;

        tracing::debug!(
            uri = %config.connection_uri,
            database = %config.database_name,
            "connected to task store"
        );
        Ok(Self { collection })
    }
}

#[async_trait]
impl TaskStore for MongoStore {
    async fn insert(&self, task: &Task) -> Result<()> {
        self.collection.insert_one(task).await?;
        Ok(())
    }

    async fn insert_many(&self, tasks: &[Task], mode: BulkMode) -> Result<()> {
        // Ordered inserts stop at the first failure; unordered keep going.
        self.collection
            .insert_many(tasks)
            .ordered(mode == BulkMode::Atomic)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>> {
        let task = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(task)
    }

    async fn find(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let cursor = self
            .collection
            .find(filter_document(filter)?)
            .sort(doc! { "created_at": 1 })
            .await?;
        let tasks = cursor.try_collect().await?;
        Ok(tasks)
    }

    async fn apply(&self, id: &str, patch: &TaskPatch) -> Result<Option<Task>> {
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_document(patch)? })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

/// Serialize one field value with the same serde rules as the document
/// itself, so queries and `$set` images always match what was persisted.
fn field_value<T: Serialize>(value: &T) -> Result<Bson> {
    bson::to_bson(value).map_err(|err| TaskError::Store(err.into()))
}

fn filter_document(filter: &TaskFilter) -> Result<Document> {
    let mut query = Document::new();
    if let Some(completed) = filter.completed {
        query.insert("completed", completed);
    }
    if let Some(priority) = filter.priority {
        query.insert("priority", field_value(&priority)?);
    }
    if let Some(due_date) = filter.due_date {
        query.insert("due_date", field_value(&due_date)?);
    }
    Ok(query)
}

fn set_document(patch: &TaskPatch) -> Result<Document> {
    let mut set = Document::new();
    if let Some(title) = &patch.title {
        set.insert("title", title);
    }
    if let Some(description) = &patch.description {
        set.insert("description", description);
    }
    if let Some(due_date) = patch.due_date {
        set.insert("due_date", field_value(&due_date)?);
    }
    if let Some(priority) = patch.priority {
        set.insert("priority", field_value(&priority)?);
    }
    if let Some(completed) = patch.completed {
        set.insert("completed", completed);
    }
    set.insert("updated_at", field_value(&patch.updated_at)?);
    Ok(set)
}
