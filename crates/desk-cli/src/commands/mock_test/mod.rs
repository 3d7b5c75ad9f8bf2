mod create;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MockTestCommands;
use crate::context::AppContext;

/// Handle `examdesk mock-test <subcommand>`. Admin only; the backend rejects
/// other roles.
pub async fn handle(
    action: &MockTestCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    match action {
        MockTestCommands::Create(form) => create::run(form, ctx, flags).await,
    }
}
