use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::require_confirmation;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TaskDeleteResponse {
    id: String,
    deleted: bool,
}

pub async fn run(id: &str, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    require_confirmation(yes, "Are you sure you want to delete this task?")?;
    ctx.client.delete_task(id).await?;
    output(
        &TaskDeleteResponse {
            id: id.to_string(),
            deleted: true,
        },
        flags.format,
    )
}
