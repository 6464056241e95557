//! Interactive dashboard loop.

#![allow(clippy::disallowed_macros)]

use anyhow::Result;
use chrono::Utc;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use taskdash_core::{parse_due_date, TaskStatus};

use crate::board::TaskBoard;
use crate::modal::{TaskForm, TaskModal};
use crate::ui;
use crate::view::{DashboardView, StatusFilter};

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Refresh,
    NewTask,
    Edit,
    ToggleStatus,
    Details,
    Delete,
    Search,
    Filter,
    ToggleView,
    ToggleTheme,
    Quit,
}

impl MenuItem {
    const ALL: [Self; 11] = [
        Self::Refresh,
        Self::NewTask,
        Self::Edit,
        Self::ToggleStatus,
        Self::Details,
        Self::Delete,
        Self::Search,
        Self::Filter,
        Self::ToggleView,
        Self::ToggleTheme,
        Self::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Refresh => "Refresh",
            Self::NewTask => "New task",
            Self::Edit => "Edit task",
            Self::ToggleStatus => "Toggle status",
            Self::Details => "Show details",
            Self::Delete => "Delete task",
            Self::Search => "Search",
            Self::Filter => "Filter by status",
            Self::ToggleView => "Switch grid/list",
            Self::ToggleTheme => "Switch theme",
            Self::Quit => "Quit",
        }
    }
}

/// Run the dashboard until the user quits.
pub async fn run_shell(board: &mut TaskBoard, view: &mut DashboardView) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut modal = TaskModal::new();

    if let Err(e) = board.refresh().await {
        ui::print_error(&format!("Could not load tasks: {e}"));
    }

    loop {
        println!();
        println!("{}", ui::render_dashboard(board.tasks(), view, Utc::now()));

        let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuItem::ALL[choice] {
            MenuItem::Refresh => {
                if let Err(e) = board.refresh().await {
                    ui::print_error(&format!("Could not load tasks: {e}"));
                }
            }
            MenuItem::NewTask => {
                modal.open_create();
                fill_form(&theme, &mut modal.form)?;
                submit(board, &mut modal).await;
            }
            MenuItem::Edit => {
                if let Some(task_id) = pick_task(&theme, board, view, "Edit which task?")? {
                    if let Some(task) = board.find(&task_id) {
                        modal.open_edit(task);
                    }
                    fill_form(&theme, &mut modal.form)?;
                    submit(board, &mut modal).await;
                }
            }
            MenuItem::ToggleStatus => {
                if let Some(task_id) = pick_task(&theme, board, view, "Toggle which task?")? {
                    match board.toggle_status(&task_id).await {
                        Ok(task) => ui::print_success(&format!(
                            "'{}' is now {}",
                            task.title, task.status
                        )),
                        Err(e) => ui::print_error(&e.to_string()),
                    }
                }
            }
            MenuItem::Details => {
                if let Some(task_id) = pick_task(&theme, board, view, "Show which task?")? {
                    if let Some(task) = board.find(&task_id) {
                        ui::display_task_details(task, Utc::now(), view.theme);
                    }
                }
            }
            MenuItem::Delete => {
                if let Some(task_id) = pick_task(&theme, board, view, "Delete which task?")? {
                    let confirmed = Confirm::with_theme(&theme)
                        .with_prompt("Delete this task?")
                        .default(false)
                        .interact()?;
                    if confirmed {
                        match board.delete(&task_id).await {
                            Ok(()) => ui::print_success("Task deleted"),
                            Err(e) => ui::print_error(&e.to_string()),
                        }
                    }
                }
            }
            MenuItem::Search => {
                let search: String = Input::with_theme(&theme)
                    .with_prompt("Search tasks (empty clears)")
                    .with_initial_text(view.search.clone())
                    .allow_empty(true)
                    .interact_text()?;
                view.set_search(search);
            }
            MenuItem::Filter => {
                let labels: Vec<String> =
                    StatusFilter::ALL.iter().map(ToString::to_string).collect();
                let current = StatusFilter::ALL
                    .iter()
                    .position(|f| *f == view.filter)
                    .unwrap_or(0);
                let idx = Select::with_theme(&theme)
                    .with_prompt("Show")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                view.filter = StatusFilter::ALL[idx];
            }
            MenuItem::ToggleView => view.view_mode = view.view_mode.toggled(),
            MenuItem::ToggleTheme => view.theme = view.theme.toggled(),
            MenuItem::Quit => return Ok(()),
        }
    }
}

/// Send the modal and report the outcome. The modal is closed either way so
/// the next form starts clean.
async fn submit(board: &mut TaskBoard, modal: &mut TaskModal) {
    let editing = modal.editing_id().is_some();

    match board.submit(modal).await {
        Ok(Some(task)) if editing => ui::print_success(&format!("Updated '{}'", task.title)),
        Ok(Some(task)) => ui::print_success(&format!("Created '{}'", task.title)),
        Ok(None) => ui::print_warning("Title is required; nothing saved"),
        Err(e) => ui::print_error(&e.to_string()),
    }

    modal.close();
}

/// Prompt for every form field, starting from the current values.
fn fill_form(theme: &ColorfulTheme, form: &mut TaskForm) -> Result<()> {
    form.title = Input::with_theme(theme)
        .with_prompt("Title")
        .with_initial_text(form.title.clone())
        .allow_empty(true)
        .interact_text()?;

    form.description = Input::with_theme(theme)
        .with_prompt("Description")
        .with_initial_text(form.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let statuses = [TaskStatus::Pending, TaskStatus::Completed];
    let labels: Vec<String> = statuses.iter().map(ToString::to_string).collect();
    let current = statuses.iter().position(|s| *s == form.status).unwrap_or(0);
    let idx = Select::with_theme(theme)
        .with_prompt("Status")
        .items(&labels)
        .default(current)
        .interact()?;
    form.status = statuses[idx];

    form.due_date = Input::with_theme(theme)
        .with_prompt("Due date (YYYY-MM-DD, empty for none)")
        .with_initial_text(form.due_date.clone())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                return Ok(());
            }
            parse_due_date(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(())
}

/// Choose one of the currently visible tasks.
fn pick_task(
    theme: &ColorfulTheme,
    board: &TaskBoard,
    view: &DashboardView,
    prompt: &str,
) -> Result<Option<String>> {
    let visible = view.filtered(board.tasks());
    if visible.is_empty() {
        ui::print_warning("No tasks to choose from");
        return Ok(None);
    }

    let labels: Vec<String> = visible
        .iter()
        .map(|task| format!("{} {}", ui::status_marker(task.status), task.title))
        .collect();

    let idx = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(idx.map(|i| visible[i].id.clone()))
}
