//! Presentation state derived from the task list.
//!
//! Nothing here is cached: stats and the filtered subset are recomputed from
//! the current list, filter and search term on every render.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use taskdash_core::{Task, TaskStatus};

/// Counters shown in the stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
            stats
        })
    }

    /// Share of completed tasks, 0-100
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Status filter applied before the search term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TaskStatus::Pending,
            Self::Completed => status == TaskStatus::Completed,
        }
    }

    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Completed];
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Card grid or compact list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Everything about how the board is shown, none of what is on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub search: String,
    pub filter: StatusFilter,
    pub view_mode: ViewMode,
    pub theme: Theme,
}

impl DashboardView {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Tasks passing both the status filter and the search term, in list order.
    pub fn filtered<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let needle = self.search.trim().to_lowercase();
        tasks
            .iter()
            .filter(|task| self.filter.matches(task.status))
            .filter(|task| needle.is_empty() || task.matches_search(&needle))
            .collect()
    }
}
