use desk_core::forms::TaskDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::task::TaskFormArgs;
use crate::context::AppContext;

use super::form;

pub async fn run(
    id: &str,
    args: &TaskFormArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    let task = ctx.client.get_task(id).await?;
    let mut draft = TaskDraft::from_task(&task);
    form::apply(&mut draft, args)?;
    form::submit(draft, ctx, flags).await
}
