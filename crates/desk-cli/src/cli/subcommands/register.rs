use std::path::PathBuf;

use clap::Subcommand;

/// Bulk registration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RegisterCommands {
    /// Register every student in a CSV file for one exam.
    Students {
        file: PathBuf,
        /// Exam ID to register the students for.
        #[arg(long)]
        exam: String,
    },
    /// Register sales team members from a CSV file.
    Sales { file: PathBuf },
}
