use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks.
    List {
        /// pending, in-progress, completed or all.
        #[arg(long)]
        status: Option<String>,
        /// Only tasks assigned to this user ID.
        #[arg(long, conflicts_with = "mine")]
        assigned_to: Option<String>,
        /// Only tasks assigned to the logged-in user.
        #[arg(long)]
        mine: bool,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Assign a new task.
    Create(TaskFormArgs),
    /// Edit a task. Only the given fields change.
    Update {
        id: String,
        #[command(flatten)]
        form: TaskFormArgs,
    },
    /// Move a task to another status.
    Status {
        id: String,
        /// pending, in-progress or completed.
        status: String,
    },
    /// Comment on a task.
    Comment { id: String, text: String },
    /// Delete a task.
    Delete {
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Keep a task, or the task list, on screen and refresh it on an interval.
    Watch {
        /// Watch one task instead of the list.
        id: Option<String>,
        /// Only tasks assigned to the logged-in user.
        #[arg(long, conflicts_with = "id")]
        mine: bool,
        /// Seconds between refreshes (defaults to poll.interval_secs).
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many updates.
        #[arg(long)]
        count: Option<u32>,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct TaskFormArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// User ID of the assignee.
    #[arg(long)]
    pub assigned_to: Option<String>,
    /// Due date (YYYY-MM-DD).
    #[arg(long)]
    pub due_date: Option<String>,
    /// high, medium or low.
    #[arg(long)]
    pub priority: Option<String>,
    /// pending, in-progress or completed.
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub school_id: Option<String>,
    #[arg(long)]
    pub school_name: Option<String>,
    /// Attach a local file (repeatable).
    #[arg(long = "attach", value_name = "PATH")]
    pub attachments: Vec<PathBuf>,
}
