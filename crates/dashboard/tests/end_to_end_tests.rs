//! Dashboard data layer against a real in-process API server.

use std::sync::Arc;

use chrono::Utc;
use taskdash::{DashboardView, StatusFilter, TaskBoard, TaskClient, TaskModal, TaskStats};
use taskdash_core::{sample_tasks, MemoryStorage, StorageMode, TaskStatus};
use taskdash_server::{build_router, AppState};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let store = Arc::new(MemoryStorage::with_tasks(sample_tasks(Utc::now())));
    let app = build_router(AppState::new(store));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_board_lifecycle() {
    let base = spawn_server().await;
    let mut board = TaskBoard::new(TaskClient::new(&base));

    board.refresh().await.unwrap();
    let stats = TaskStats::from_tasks(board.tasks(), Utc::now());
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.overdue, 1);

    // Create through the form
    let mut modal = TaskModal::new();
    modal.open_create();
    modal.form.title = "Buy milk".to_string();
    modal.form.due_date = "2000-01-01".to_string();
    let created = board.submit(&mut modal).await.unwrap().unwrap();
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(
        TaskStats::from_tasks(board.tasks(), Utc::now()).overdue,
        2
    );

    // Completing an overdue task clears it from the overdue count
    board.toggle_status(&created.id).await.unwrap();
    assert_eq!(
        TaskStats::from_tasks(board.tasks(), Utc::now()).overdue,
        1
    );

    // Edit clears the due date
    let task = board.find(&created.id).unwrap().clone();
    modal.open_edit(&task);
    modal.form.title = "Buy oat milk".to_string();
    modal.form.due_date.clear();
    let edited = board.submit(&mut modal).await.unwrap().unwrap();
    assert_eq!(edited.title, "Buy oat milk");
    assert_eq!(edited.due_date, None);
    assert_eq!(edited.status, TaskStatus::Completed);

    // The board matches the server after every step
    let server_view = TaskClient::new(&base).list_tasks().await.unwrap();
    assert_eq!(server_view, board.tasks());

    board.delete(&created.id).await.unwrap();
    assert_eq!(board.tasks().len(), 4);

    let err = board.client().get_task(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_filtered_view_over_live_data() {
    let base = spawn_server().await;
    let mut board = TaskBoard::new(TaskClient::new(&base));
    board.refresh().await.unwrap();

    let mut view = DashboardView {
        filter: StatusFilter::Completed,
        ..DashboardView::default()
    };
    let completed: Vec<_> = view.filtered(board.tasks()).iter().map(|t| t.title.clone()).collect();
    assert_eq!(completed, ["Review pull requests"]);

    view.filter = StatusFilter::All;
    view.set_search("AUTH");
    let matches: Vec<_> = view.filtered(board.tasks()).iter().map(|t| t.title.clone()).collect();
    assert_eq!(matches, ["Fix authentication bug"]);
}

#[tokio::test]
async fn test_health_reports_in_memory() {
    let base = spawn_server().await;
    let health = TaskClient::new(base).health().await.unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.storage, StorageMode::InMemory);
}
