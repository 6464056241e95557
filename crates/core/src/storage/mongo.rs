//! MongoDB-backed storage.

use std::time::Duration;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::traits::{StorageMode, TaskStore};
use crate::entities::{Task, TaskDraft, TaskPatch, TaskStatus};
use crate::errors::{TasksError, TasksResult};

/// Task as persisted in the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskDocument {
    #[serde(rename = "_id")]
    id: ObjectId,

    title: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    status: TaskStatus,

    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,

    #[serde(default, rename = "dueDate")]
    due_date: Option<bson::DateTime>,
}

impl TaskDocument {
    fn from_task(id: ObjectId, task: &Task) -> Self {
        Self {
            id,
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            created_at: bson::DateTime::from_chrono(task.created_at),
            due_date: task.due_date.map(bson::DateTime::from_chrono),
        }
    }
}

impl From<TaskDocument> for Task {
    fn from(doc: TaskDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            description: doc.description,
            status: doc.status,
            created_at: doc.created_at.to_chrono(),
            due_date: doc.due_date.map(bson::DateTime::to_chrono),
        }
    }
}

/// Document-store implementation over a single collection
pub struct MongoStorage {
    collection: Collection<TaskDocument>,
}

impl MongoStorage {
    /// Connect and ping the server.
    ///
    /// The driver connects lazily, so the ping is what tells the caller
    /// whether the store is reachable. `timeout` bounds both the TCP connect
    /// and server selection.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> TasksResult<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(connection_error)?;
        options.app_name = Some("taskdash".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(connection_error)?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(connection_error)?;

        info!(database, collection, "Connected to MongoDB");

        Ok(Self {
            collection: db.collection(collection),
        })
    }

    /// Insert `tasks` if the collection is empty. Returns how many were inserted.
    ///
    /// Seeded tasks get fresh ObjectIds; their other fields are kept.
    pub async fn seed_if_empty(&self, tasks: &[Task]) -> TasksResult<usize> {
        if self.collection.count_documents(doc! {}).await? > 0 {
            return Ok(0);
        }

        let docs: Vec<TaskDocument> = tasks
            .iter()
            .map(|task| TaskDocument::from_task(ObjectId::new(), task))
            .collect();
        if docs.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(docs).await?;
        info!(count = result.inserted_ids.len(), "Sample tasks inserted");
        Ok(result.inserted_ids.len())
    }
}

fn connection_error(err: mongodb::error::Error) -> TasksError {
    TasksError::ConnectionError {
        reason: err.to_string(),
    }
}

/// Identifiers that are not ObjectIds can never match a document, so they
/// are treated like any other unknown id.
fn object_id(task_id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(task_id).ok()
}

/// `$set` body for the fields present in `patch`
fn set_document(patch: &TaskPatch) -> Document {
    let mut set = Document::new();
    if let Some(title) = &patch.title {
        set.insert("title", title.trim());
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.trim());
    }
    if let Some(status) = patch.status {
        set.insert("status", status.to_string());
    }
    if let Some(due_date) = patch.due_date {
        set.insert("dueDate", due_date.map(bson::DateTime::from_chrono));
    }
    set
}

#[async_trait]
impl TaskStore for MongoStorage {
    fn storage_mode(&self) -> StorageMode {
        StorageMode::Mongo
    }

    async fn list_tasks(&self) -> TasksResult<Vec<Task>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<TaskDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Task::from).collect())
    }

    async fn get_task(&self, task_id: &str) -> TasksResult<Option<Task>> {
        let Some(oid) = object_id(task_id) else {
            return Ok(None);
        };

        let doc = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(doc.map(Task::from))
    }

    async fn create_task(&self, draft: TaskDraft) -> TasksResult<Task> {
        let oid = ObjectId::new();
        let task = draft.into_task(oid.to_hex(), Utc::now())?;

        self.collection
            .insert_one(TaskDocument::from_task(oid, &task))
            .await?;
        debug!(task_id = %task.id, "Inserted task document");

        Ok(task)
    }

    async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> TasksResult<Option<Task>> {
        patch.validate()?;

        let Some(oid) = object_id(task_id) else {
            return Ok(None);
        };

        // `$set` with an empty document is rejected by the server
        if patch.is_empty() {
            return self.get_task(task_id).await;
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set_document(patch) })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.map(Task::from))
    }

    async fn delete_task(&self, task_id: &str) -> TasksResult<bool> {
        let Some(oid) = object_id(task_id) else {
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}
