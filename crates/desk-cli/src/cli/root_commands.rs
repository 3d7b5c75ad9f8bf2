use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, ExamCommands, ExportCommands, MockTestCommands, RegisterCommands, TaskCommands,
    UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, sign up, log out, inspect the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse and manage exams.
    Exam {
        #[command(subcommand)]
        action: ExamCommands,
    },
    /// Assign and track tasks between admin and sales.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Admin user management.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Author mock tests.
    MockTest {
        #[command(subcommand)]
        action: MockTestCommands,
    },
    /// Filtered CSV export.
    Export {
        #[command(subcommand)]
        action: ExportCommands,
    },
    /// Bulk registration from CSV files.
    Register {
        #[command(subcommand)]
        action: RegisterCommands,
    },
    /// Show the dashboard for the logged-in role.
    Dashboard(DashboardArgs),
    /// Print the JSON Schema of a wire type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Narrow exam lists by title or subject.
    #[arg(long)]
    pub search: Option<String>,
    /// Only exams of this subject.
    #[arg(long)]
    pub subject: Option<String>,
    /// Only exams of this difficulty (easy, medium, hard).
    #[arg(long)]
    pub difficulty: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: exam, task, user, bulk-report, login-response,
    /// signup-request, exam-payload, mock-test-payload, user-update.
    pub type_name: String,
}
