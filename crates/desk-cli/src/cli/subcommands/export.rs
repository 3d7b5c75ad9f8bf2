use std::path::PathBuf;

use clap::Subcommand;

/// CSV export commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExportCommands {
    /// Download a CSV of users matching the filters.
    Csv {
        /// student, school, admin or sales.
        #[arg(long)]
        role: Option<String>,
        /// School name.
        #[arg(long)]
        school: Option<String>,
        /// Target file or directory (defaults to the current directory).
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// List the filter values the backend offers.
    Filters,
}
