use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::require_confirmation;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExamDeleteResponse {
    id: String,
    deleted: bool,
    message: &'static str,
}

pub async fn run(id: &str, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    require_confirmation(yes, "Are you sure you want to delete this exam?")?;
    ctx.client.delete_exam(id).await?;
    output(
        &ExamDeleteResponse {
            id: id.to_string(),
            deleted: true,
            message: "Exam deleted successfully",
        },
        flags.format,
    )
}
