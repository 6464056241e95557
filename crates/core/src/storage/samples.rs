//! Sample tasks used to pre-populate an empty store.

use chrono::{DateTime, Duration, SubsecRound, Utc};

use crate::entities::{Task, TaskStatus};

/// Four sample tasks with dates relative to `now`, so a fresh dashboard
/// shows a mix of upcoming, completed and overdue work.
pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let now = now.trunc_subsecs(3);
    let sample = |id: &str, title: &str, description: &str, status, created: i64, due: i64| Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        created_at: now - Duration::days(created),
        due_date: Some(now + Duration::days(due)),
    };

    vec![
        sample(
            "1",
            "Complete project documentation",
            "Write comprehensive documentation for the new feature",
            TaskStatus::Pending,
            2,
            6,
        ),
        sample(
            "2",
            "Review pull requests",
            "Review and merge pending PRs from team members",
            TaskStatus::Completed,
            5,
            0,
        ),
        sample(
            "3",
            "Update dependencies",
            "Update all packages to latest versions",
            TaskStatus::Pending,
            10,
            -2,
        ),
        sample(
            "4",
            "Fix authentication bug",
            "Resolve the token refresh issue in production",
            TaskStatus::Pending,
            3,
            3,
        ),
    ]
}
