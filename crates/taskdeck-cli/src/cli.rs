use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A single-tenant task tracker", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the task data file (or set TASKDECK_FILE)
    #[arg(long, value_name = "FILE", env = "TASKDECK_FILE")]
    pub file: String,

    /// Acting user id (or set TASKDECK_USER)
    #[arg(long, value_name = "UUID", env = "TASKDECK_USER")]
    pub user: Option<Uuid>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task operations
    Task(TaskCommand),
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Create(TaskCreateArgs),
    /// List your tasks, newest first
    List,
    /// Show a single task
    Show {
        #[arg(long)]
        id: Uuid,
    },
    /// Replace all editable fields of a task
    Update(TaskUpdateArgs),
    /// Change only the status of a task
    Status {
        #[arg(long)]
        id: Uuid,
        /// One of: pending, in_progress, completed
        #[arg(long)]
        status: String,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// One of: pending, in_progress, completed
    #[arg(long)]
    pub status: String,
    /// One of: low, medium, high
    #[arg(long)]
    pub priority: String,
    /// ISO-8601 date (YYYY-MM-DD), today or later
    #[arg(long)]
    pub due_date: Option<String>,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: String,
    /// Omitting this clears any stored description
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: String,
    #[arg(long)]
    pub priority: String,
    /// Omitting this clears any stored due date
    #[arg(long)]
    pub due_date: Option<String>,
}
