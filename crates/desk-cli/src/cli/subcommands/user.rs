use clap::{Args, Subcommand};

/// Admin user management commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List {
        /// Match name or email.
        #[arg(long)]
        search: Option<String>,
        /// student, school, admin or sales.
        #[arg(long)]
        role: Option<String>,
    },
    /// Get a user by ID.
    Get { id: String },
    /// Activate or deactivate an account.
    SetStatus {
        id: String,
        /// active or inactive.
        status: String,
    },
    /// Edit a user's profile. Only the given fields change.
    Update {
        id: String,
        #[command(flatten)]
        edit: UserEditArgs,
    },
    /// Delete a user.
    Delete {
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct UserEditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Pass an empty value to clear it.
    #[arg(long)]
    pub school_name: Option<String>,
    /// Pass an empty value to clear it.
    #[arg(long)]
    pub phone_number: Option<String>,
}
