//! Task entity and related types.

use chrono::{DateTime, NaiveDate, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TasksError;

/// Task status values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// The other status; used by the dashboard's check button
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = TasksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(TasksError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, immutable after creation
    #[serde(alias = "_id")]
    pub id: String,

    /// Non-empty, trimmed title
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(default, rename = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// A task is overdue when its due date has passed and it is not completed
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Completed && self.due_date.is_some_and(|due| due < now)
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Parse a due date as sent by clients.
///
/// Accepts full RFC 3339 timestamps and plain `YYYY-MM-DD` dates, the latter
/// interpreted as midnight UTC. Sub-millisecond digits are dropped.
pub fn parse_due_date(input: &str) -> Result<DateTime<Utc>, TasksError> {
    let input = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc).trunc_subsecs(3));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| TasksError::validation(format!("Invalid due date: '{input}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task(status: TaskStatus, due_date: Option<DateTime<Utc>>) -> Task {
        Task {
            id: "1".to_string(),
            title: "Write docs".to_string(),
            description: "User guide for the API".to_string(),
            status,
            created_at: Utc::now(),
            due_date,
        }
    }

    #[test]
    fn test_task_status_parsing() {
        assert_eq!(
            "pending".parse::<TaskStatus>().unwrap(),
            TaskStatus::Pending
        );
        assert_eq!(
            "Completed".parse::<TaskStatus>().unwrap(),
            TaskStatus::Completed
        );
        assert!("in-progress".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
    }

    #[test]
    fn test_overdue_requires_past_due_date_and_pending() {
        let now = Utc::now();
        let yesterday = now - Duration::days(1);
        let tomorrow = now + Duration::days(1);

        assert!(task(TaskStatus::Pending, Some(yesterday)).is_overdue(now));
        assert!(!task(TaskStatus::Pending, Some(tomorrow)).is_overdue(now));
        assert!(!task(TaskStatus::Pending, None).is_overdue(now));
        assert!(!task(TaskStatus::Completed, Some(yesterday)).is_overdue(now));
    }

    #[test]
    fn test_completing_clears_overdue() {
        let now = Utc::now();
        let mut t = task(TaskStatus::Pending, Some(now - Duration::hours(1)));
        assert!(t.is_overdue(now));

        t.status = t.status.toggled();
        assert!(!t.is_overdue(now));
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let t = task(TaskStatus::Pending, None);
        assert!(t.matches_search("docs"));
        assert!(t.matches_search("user guide"));
        assert!(!t.matches_search("milk"));
    }

    #[test]
    fn test_wire_format() {
        let created = Utc.with_ymd_and_hms(2024, 12, 28, 9, 30, 0).unwrap();
        let t = Task {
            id: "abc".to_string(),
            title: "Buy milk".to_string(),
            description: String::new(),
            status: TaskStatus::Pending,
            created_at: created,
            due_date: None,
        };

        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["createdAt"], "2024-12-28T09:30:00Z");
        assert!(json["dueDate"].is_null());
    }

    #[test]
    fn test_accepts_mongo_style_id() {
        let t: Task = serde_json::from_str(
            r#"{"_id":"64f0","title":"Review PRs","status":"completed","createdAt":"2024-12-25T00:00:00Z","dueDate":null}"#,
        )
        .unwrap();
        assert_eq!(t.id, "64f0");
        assert_eq!(t.description, "");
        assert_eq!(t.status, TaskStatus::Completed);
    }

    #[test]
    fn test_parse_due_date_formats() {
        let date_only = parse_due_date("2025-01-05").unwrap();
        assert_eq!(date_only, Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap());

        let full = parse_due_date("2025-01-05T12:00:00+02:00").unwrap();
        assert_eq!(full, Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap());

        assert!(parse_due_date("next tuesday").is_err());

        let precise = parse_due_date("2025-01-05T10:00:00.123456Z").unwrap();
        assert_eq!(precise.to_rfc3339(), "2025-01-05T10:00:00.123+00:00");
    }
}
