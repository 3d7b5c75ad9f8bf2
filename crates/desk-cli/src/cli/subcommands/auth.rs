use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an admin or school account.
    Signup(AuthSignupArgs),
    /// Clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Account type: student, school, admin, sales.
    #[arg(long)]
    pub role: String,
    /// Password on the command line (prefer --password-stdin).
    #[arg(long, conflicts_with = "password_stdin")]
    pub password: Option<String>,
    /// Read the password from the first line of stdin.
    #[arg(long)]
    pub password_stdin: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    /// Account type: admin or school.
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Password on the command line (prefer --password-stdin).
    #[arg(long, conflicts_with = "password_stdin", requires = "confirm_password")]
    pub password: Option<String>,
    #[arg(long, conflicts_with = "password_stdin")]
    pub confirm_password: Option<String>,
    /// Read the password, then its confirmation, from the first two lines
    /// of stdin.
    #[arg(long)]
    pub password_stdin: bool,
    /// Required for admin accounts.
    #[arg(long)]
    pub phone_number: Option<String>,
    /// Required for school accounts.
    #[arg(long)]
    pub school_name: Option<String>,
    /// Required for school accounts.
    #[arg(long)]
    pub school_id: Option<String>,
    /// Required for school accounts.
    #[arg(long)]
    pub address: Option<String>,
}
