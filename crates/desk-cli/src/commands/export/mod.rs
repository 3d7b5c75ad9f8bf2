mod csv;
mod filters;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExportCommands;
use crate::context::AppContext;

/// Handle `examdesk export <subcommand>`.
pub async fn handle(
    action: &ExportCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    match action {
        ExportCommands::Csv {
            role,
            school,
            output,
        } => csv::run(role.as_deref(), school.as_deref(), output.as_deref(), ctx, flags).await,
        ExportCommands::Filters => filters::run(ctx, flags).await,
    }
}
