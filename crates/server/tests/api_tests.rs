//! Integration tests for the task API.
//!
//! Each test starts the real router on a random port and drives it over
//! HTTP with reqwest.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use taskdash_core::{
    MemoryStorage, StorageMode, Task, TaskDraft, TaskPatch, TaskStore, TasksError, TasksResult,
};
use taskdash_server::{build_router, AppState};
use tokio::net::TcpListener;

// =============================================================================
// Helpers
// =============================================================================

/// Start the API on a random port and return its base URL.
async fn spawn_app(store: Arc<dyn TaskStore>) -> String {
    let app = build_router(AppState::new(store));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn spawn_memory_app() -> (String, Arc<MemoryStorage>) {
    let store = Arc::new(MemoryStorage::new());
    let url = spawn_app(store.clone()).await;
    (url, store)
}

async fn create(client: &reqwest::Client, base: &str, body: Value) -> (StatusCode, Value) {
    let response = client
        .post(format!("{base}/tasks"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

/// Store whose every operation fails, for exercising the 500 paths.
struct FailingStore;

#[async_trait]
impl TaskStore for FailingStore {
    fn storage_mode(&self) -> StorageMode {
        StorageMode::Mongo
    }

    async fn list_tasks(&self) -> TasksResult<Vec<Task>> {
        Err(broken())
    }

    async fn get_task(&self, _task_id: &str) -> TasksResult<Option<Task>> {
        Err(broken())
    }

    async fn create_task(&self, _draft: TaskDraft) -> TasksResult<Task> {
        Err(broken())
    }

    async fn update_task(&self, _task_id: &str, _patch: &TaskPatch) -> TasksResult<Option<Task>> {
        Err(broken())
    }

    async fn delete_task(&self, _task_id: &str) -> TasksResult<bool> {
        Err(broken())
    }
}

fn broken() -> TasksError {
    TasksError::StorageError {
        reason: "server selection timeout".to_string(),
    }
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_task_defaults() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let (status, body) = create(&client, &base, json!({ "title": "Buy milk" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["description"], "");
    assert_eq!(body["status"], "pending");
    assert!(body["dueDate"].is_null());
    assert!(body["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn test_create_trims_and_parses_due_date() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let (status, body) = create(
        &client,
        &base,
        json!({
            "title": "  Ship release  ",
            "description": " notes ",
            "status": "completed",
            "dueDate": "2025-01-05"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Ship release");
    assert_eq!(body["description"], "notes");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["dueDate"], "2025-01-05T00:00:00Z");
}

#[tokio::test]
async fn test_due_date_stored_at_millisecond_precision() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let (status, body) = create(
        &client,
        &base,
        json!({ "title": "x", "dueDate": "2025-01-05T10:00:00.123456Z" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["dueDate"], "2025-01-05T10:00:00.123Z");
}

#[tokio::test]
async fn test_create_blank_title_rejected_and_not_persisted() {
    let (base, store) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    for body in [json!({ "title": "   " }), json!({ "description": "no title" })] {
        let (status, error) = create(&client, &base, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"], "Title is required");
    }

    assert!(store.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_bodies_are_json_errors() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/tasks"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    let (status, _) = create(&client, &base, json!({ "title": "x", "status": "doing" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_get_unknown_task_is_404() {
    let (base, _) = spawn_memory_app().await;

    let response = reqwest::get(format!("{base}/tasks/unknown-id")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Task not found" }));
}

#[tokio::test]
async fn test_list_and_get() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let (_, first) = create(&client, &base, json!({ "title": "first" })).await;
    create(&client, &base, json!({ "title": "second" })).await;

    let list: Vec<Value> = reqwest::get(format!("{base}/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 2);

    let id = first["id"].as_str().unwrap();
    let fetched: Value = reqwest::get(format!("{base}/tasks/{id}"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, first);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_partial_update_is_idempotent() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let (_, task) = create(
        &client,
        &base,
        json!({ "title": "Buy milk", "description": "semi-skimmed" }),
    )
    .await;
    let id = task["id"].as_str().unwrap();

    let mut results = Vec::new();
    for _ in 0..2 {
        let response = client
            .put(format!("{base}/tasks/{id}"))
            .json(&json!({ "status": "completed" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        results.push(response.json::<Value>().await.unwrap());
    }

    assert_eq!(results[0]["status"], "completed");
    assert_eq!(results[0]["title"], "Buy milk");
    assert_eq!(results[0]["description"], "semi-skimmed");
    assert_eq!(results[0]["createdAt"], task["createdAt"]);
    assert_eq!(results[0], results[1]);
}

#[tokio::test]
async fn test_update_sets_and_clears_due_date() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let (_, task) = create(&client, &base, json!({ "title": "Report" })).await;
    let url = format!("{base}/tasks/{}", task["id"].as_str().unwrap());

    let set: Value = client
        .put(&url)
        .json(&json!({ "dueDate": "2025-02-01T10:00:00Z" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(set["dueDate"], "2025-02-01T10:00:00Z");

    let cleared: Value = client
        .put(&url)
        .json(&json!({ "dueDate": null }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(cleared["dueDate"].is_null());
    assert_eq!(cleared["title"], "Report");
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let (_, task) = create(&client, &base, json!({ "title": "Keep" })).await;
    let response = client
        .put(format!("{base}/tasks/{}", task["id"].as_str().unwrap()))
        .json(&json!({ "title": "  " }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_task_is_404() {
    let (base, _) = spawn_memory_app().await;

    let response = reqwest::Client::new()
        .put(format!("{base}/tasks/unknown-id"))
        .json(&json!({ "status": "completed" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_task() {
    let (base, store) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    let (_, task) = create(&client, &base, json!({ "title": "Temporary" })).await;
    let url = format!("{base}/tasks/{}", task["id"].as_str().unwrap());

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Task deleted successfully");

    let again = client.delete(&url).send().await.unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    assert!(store.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_leaves_store_unchanged() {
    let (base, store) = spawn_memory_app().await;
    let client = reqwest::Client::new();
    create(&client, &base, json!({ "title": "Stay" })).await;

    let response = client
        .delete(format!("{base}/tasks/unknown-id"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.list_tasks().await.unwrap().len(), 1);
}

// =============================================================================
// Health, prefixes and failures
// =============================================================================

#[tokio::test]
async fn test_health_reports_storage_mode() {
    let (base, _) = spawn_memory_app().await;

    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "in-memory");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_api_prefix_serves_same_store() {
    let (base, _) = spawn_memory_app().await;
    let client = reqwest::Client::new();

    create(&client, &base, json!({ "title": "Shared" })).await;

    let list: Vec<Value> = reqwest::get(format!("{base}/api/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Shared");
}

#[tokio::test]
async fn test_store_failures_map_to_generic_500() {
    let base = spawn_app(Arc::new(FailingStore)).await;
    let client = reqwest::Client::new();

    let cases = [
        (client.get(format!("{base}/tasks")), "Failed to fetch tasks"),
        (client.get(format!("{base}/tasks/abc")), "Failed to fetch task"),
        (
            client.post(format!("{base}/tasks")).json(&json!({ "title": "x" })),
            "Failed to create task",
        ),
        (
            client
                .put(format!("{base}/tasks/abc"))
                .json(&json!({ "status": "completed" })),
            "Failed to update task",
        ),
        (client.delete(format!("{base}/tasks/abc")), "Failed to delete task"),
    ];

    for (request, message) in cases {
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": message }));
    }
}
