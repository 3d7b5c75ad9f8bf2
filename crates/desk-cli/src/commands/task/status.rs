use desk_core::entities::Task;
use desk_core::enums::TaskStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TaskStatusResponse {
    message: &'static str,
    task: Task,
}

pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    let status: TaskStatus = parse_enum(status)?;
    let task = ctx.client.set_task_status(id, status).await?;
    output(
        &TaskStatusResponse {
            message: "Task status updated",
            task,
        },
        flags.format,
    )
}
