mod delete;
mod get;
mod list;
mod set_status;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `examdesk user <subcommand>`. Admin only; the backend rejects
/// other roles.
pub async fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    match action {
        UserCommands::List { search, role } => {
            list::run(search.as_deref(), role.as_deref(), ctx, flags).await
        }
        UserCommands::Get { id } => get::run(id, ctx, flags).await,
        UserCommands::SetStatus { id, status } => set_status::run(id, status, ctx, flags).await,
        UserCommands::Update { id, edit } => update::run(id, edit, ctx, flags).await,
        UserCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
    }
}
