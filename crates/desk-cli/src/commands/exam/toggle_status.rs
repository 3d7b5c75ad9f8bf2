use desk_core::enums::ExamStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExamToggleResponse {
    id: String,
    status: ExamStatus,
    message: String,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    let status = ctx.client.toggle_exam_status(id).await?;
    let message = match status {
        ExamStatus::Active => "Exam activated successfully",
        ExamStatus::Inactive => "Exam deactivated successfully",
    };
    output(
        &ExamToggleResponse {
            id: id.to_string(),
            status,
            message: message.to_string(),
        },
        flags.format,
    )
}
