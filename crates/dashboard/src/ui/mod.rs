//! Terminal rendering for the dashboard.
//!
//! Rendering functions build `String`s and tables so they can be checked
//! without a terminal; the `print_*` helpers write to stdout.

#![allow(clippy::disallowed_macros)]

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use taskdash_core::{Task, TaskStatus};

use crate::view::{DashboardView, TaskStats, Theme, ViewMode};

/// Cards per row in grid view
const GRID_COLUMNS: usize = 3;

/// Colors used for one theme
#[derive(Debug, Clone, Copy)]
struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGrey,
        },
        Theme::Light => Palette {
            accent: Color::DarkBlue,
            text: Color::Black,
            muted: Color::Grey,
        },
    }
}

fn accent(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Dark => text.cyan().bold(),
        Theme::Light => text.blue().bold(),
    }
}

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::Completed => Color::Green,
    }
}

/// Checkbox-style marker for a status
pub fn status_marker(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "○",
        TaskStatus::Completed => "●",
    }
}

/// Human due date, `-` when unset
pub fn format_due_date(due_date: Option<DateTime<Utc>>) -> String {
    due_date.map_or_else(|| "-".to_string(), |due| due.format("%b %-d, %Y").to_string())
}

/// Stat cards as a one-row table
pub fn stats_table(stats: &TaskStats, theme: Theme) -> Table {
    let colors = palette(theme);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Total Tasks").fg(colors.accent),
        Cell::new("Pending").fg(colors.accent),
        Cell::new("Completed").fg(colors.accent),
        Cell::new("Overdue").fg(colors.accent),
    ]);

    let overdue_color = if stats.overdue > 0 {
        Color::Red
    } else {
        colors.muted
    };

    table.add_row(vec![
        Cell::new(stats.total)
            .fg(colors.text)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.pending).fg(Color::Yellow),
        Cell::new(format!(
            "{} ({:.0}%)",
            stats.completed,
            stats.completion_percent()
        ))
        .fg(Color::Green),
        Cell::new(stats.overdue).fg(overdue_color),
    ]);

    table
}

/// Compact list view: one row per task
pub fn task_table(tasks: &[&Task], now: DateTime<Utc>, theme: Theme) -> Table {
    let colors = palette(theme);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("").fg(colors.accent),
        Cell::new("Title").fg(colors.accent),
        Cell::new("Description").fg(colors.accent),
        Cell::new("Status").fg(colors.accent),
        Cell::new("Due").fg(colors.accent),
        Cell::new("ID").fg(colors.accent),
    ]);

    for task in tasks {
        let due = if task.is_overdue(now) {
            Cell::new(format!("{} OVERDUE", format_due_date(task.due_date))).fg(Color::Red)
        } else {
            Cell::new(format_due_date(task.due_date)).fg(colors.text)
        };

        let title = if task.status == TaskStatus::Completed {
            Cell::new(&task.title)
                .fg(colors.muted)
                .add_attribute(Attribute::CrossedOut)
        } else {
            Cell::new(&task.title).fg(colors.text)
        };

        table.add_row(vec![
            Cell::new(status_marker(task.status)).fg(status_color(task.status)),
            title,
            Cell::new(&task.description).fg(colors.muted),
            Cell::new(task.status.to_string()).fg(status_color(task.status)),
            due,
            Cell::new(&task.id).fg(colors.muted),
        ]);
    }

    table
}

/// Text of a single card
pub fn card_text(task: &Task, now: DateTime<Utc>) -> String {
    let mut card = format!("{} {}\n", status_marker(task.status), task.title);
    if !task.description.is_empty() {
        let _ = writeln!(card, "{}", task.description);
    }
    let _ = write!(card, "[{}]", task.status);
    if task.due_date.is_some() {
        let _ = write!(card, "  Due {}", format_due_date(task.due_date));
    }
    if task.is_overdue(now) {
        card.push_str("  OVERDUE");
    }
    let _ = write!(card, "\n#{}", task.id);
    card
}

/// Grid view: cards laid out `GRID_COLUMNS` per row
pub fn task_grid(tasks: &[&Task], now: DateTime<Utc>, theme: Theme) -> Table {
    let colors = palette(theme);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    for row in tasks.chunks(GRID_COLUMNS) {
        let cells: Vec<Cell> = row
            .iter()
            .map(|task| {
                let color = if task.is_overdue(now) {
                    Color::Red
                } else if task.status == TaskStatus::Completed {
                    colors.muted
                } else {
                    colors.text
                };
                Cell::new(card_text(task, now)).fg(color)
            })
            .collect();
        table.add_row(cells);
    }

    table
}

/// Full dashboard: title, stat cards, active filters and the task area.
pub fn render_dashboard(tasks: &[Task], view: &DashboardView, now: DateTime<Utc>) -> String {
    let stats = TaskStats::from_tasks(tasks, now);
    let visible = view.filtered(tasks);

    let mut out = String::new();
    let _ = writeln!(out, "{}", accent("TASK//DASH", view.theme));
    let _ = writeln!(out, "{}", stats_table(&stats, view.theme));

    let search = if view.search.trim().is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", view.search.trim())
    };
    let _ = writeln!(
        out,
        "{} {}   {} {}   {} {}",
        "Filter:".dimmed(),
        view.filter,
        "Search:".dimmed(),
        search,
        "Showing:".dimmed(),
        visible.len()
    );

    if visible.is_empty() {
        let _ = writeln!(out, "\n{}", "No tasks found".dimmed());
        let _ = writeln!(
            out,
            "{}",
            "Create a new task or adjust the filters".dimmed()
        );
        return out;
    }

    let body = match view.view_mode {
        ViewMode::Grid => task_grid(&visible, now, view.theme),
        ViewMode::List => task_table(&visible, now, view.theme),
    };
    let _ = writeln!(out, "{body}");
    out
}

/// Display one task with all its fields
pub fn display_task_details(task: &Task, now: DateTime<Utc>, theme: Theme) {
    println!("{}", "═".repeat(60).dimmed());
    println!(
        "{} {} {}",
        accent("Task", theme),
        task.id.dimmed(),
        format!("[{}]", task.status).yellow()
    );
    println!("{}", "═".repeat(60).dimmed());
    println!();

    println!("{}: {}", "Title".bold(), task.title);
    println!("{}: {}", "Status".bold(), task.status);
    println!(
        "{}: {}",
        "Created".bold(),
        task.created_at.format("%b %-d, %Y %H:%M")
    );
    print!("{}: {}", "Due".bold(), format_due_date(task.due_date));
    if task.is_overdue(now) {
        print!(" {}", "OVERDUE".red().bold());
    }
    println!();

    if !task.description.is_empty() {
        println!();
        println!("{}", "Description".bold().underline());
        println!("{}", task.description);
    }

    println!();
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
