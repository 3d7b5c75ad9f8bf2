mod comment;
mod create;
mod delete;
mod form;
mod get;
mod list;
mod status;
mod update;
mod watch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `examdesk task <subcommand>`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::List {
            status,
            assigned_to,
            mine,
        } => list::run(status.as_deref(), assigned_to.as_deref(), *mine, ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Create(form) => create::run(form, ctx, flags).await,
        TaskCommands::Update { id, form } => update::run(id, form, ctx, flags).await,
        TaskCommands::Status { id, status } => status::run(id, status, ctx, flags).await,
        TaskCommands::Comment { id, text } => comment::run(id, text, ctx, flags).await,
        TaskCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
        TaskCommands::Watch {
            id,
            mine,
            interval,
            count,
        } => watch::run(id.as_deref(), *mine, *interval, *count, ctx, flags).await,
    }
}

/// The logged-in user's ID, needed for "assigned to me" views.
fn own_user_id(ctx: &AppContext) -> anyhow::Result<String> {
    ctx.require_session()?
        .user_id
        .clone()
        .ok_or_else(|| anyhow::anyhow!("session has no user id; run `examdesk auth login` again"))
}
