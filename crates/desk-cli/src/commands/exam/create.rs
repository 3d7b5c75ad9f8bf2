use desk_core::forms::ExamDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::exam::ExamFormArgs;
use crate::context::AppContext;

use super::form;

pub async fn run(args: &ExamFormArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    let mut draft = ExamDraft::new();
    form::apply(&mut draft, args)?;
    form::submit(draft, ctx, flags).await
}
