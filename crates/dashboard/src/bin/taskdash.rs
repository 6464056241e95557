//! TaskDash terminal dashboard.

#![warn(clippy::pedantic)]
#![allow(clippy::disallowed_macros)]

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskdash::ui;
use taskdash::{
    DashboardView, StatusFilter, TaskBoard, TaskClient, TaskStats, Theme, ViewMode,
    DEFAULT_API_URL,
};

#[derive(Parser)]
#[command(name = "taskdash")]
#[command(about = "Terminal dashboard for TaskDash", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the TaskDash API
    #[arg(long, global = true, env = "TASKDASH_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Color theme
    #[arg(long, global = true, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard (default)
    Shell,

    /// Render the task board once
    List {
        /// Filter by status
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        /// Case-insensitive match on title or description
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Card grid or compact list
        #[arg(long, value_enum, default_value_t = ViewMode::Grid)]
        view: ViewMode,
    },

    /// Show the stat cards only
    Stats,

    /// Show the server's health and storage mode
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Only failures reach the console unless RUST_LOG says otherwise
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let mut board = TaskBoard::new(TaskClient::new(cli.api_url));
    let mut view = DashboardView {
        theme: cli.theme,
        ..DashboardView::default()
    };

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => taskdash::shell::run_shell(&mut board, &mut view).await?,
        Commands::List {
            status,
            search,
            view: view_mode,
        } => {
            board.refresh().await?;
            view.filter = status;
            view.view_mode = view_mode;
            if let Some(search) = search {
                view.set_search(search);
            }
            println!("{}", ui::render_dashboard(board.tasks(), &view, Utc::now()));
        }
        Commands::Stats => {
            board.refresh().await?;
            let stats = TaskStats::from_tasks(board.tasks(), Utc::now());
            println!("{}", ui::stats_table(&stats, view.theme));
        }
        Commands::Health => {
            let health = board.client().health().await?;
            ui::print_success(&format!(
                "{} is {} (storage: {})",
                board.client().base_url(),
                health.status,
                health.storage.to_string().bold()
            ));
        }
    }

    Ok(())
}
