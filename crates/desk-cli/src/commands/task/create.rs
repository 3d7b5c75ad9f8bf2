use chrono::Utc;
use desk_core::forms::TaskDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::task::TaskFormArgs;
use crate::context::AppContext;

use super::form;

pub async fn run(args: &TaskFormArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let mut draft = TaskDraft::new(
        session.role,
        session.user_name.as_deref().unwrap_or_default(),
        Utc::now().date_naive(),
    );
    form::apply(&mut draft, args)?;
    form::submit(draft, ctx, flags).await
}
