use desk_core::entities::Task;
use desk_core::filter::TaskQuery;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_status_filter;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TaskListResponse {
    tasks: Vec<Task>,
}

pub async fn run(
    status: Option<&str>,
    assigned_to: Option<&str>,
    mine: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    let assigned_to = if mine {
        Some(super::own_user_id(ctx)?)
    } else {
        assigned_to.map(str::to_string)
    };
    let query = TaskQuery {
        status: parse_status_filter(status)?,
        assigned_to: None,
    };

    let fetched = ctx.client.list_tasks(assigned_to.as_deref()).await?;
    let mut tasks = query.apply(&fetched);
    truncate(
        &mut tasks,
        effective_limit(flags.limit, ctx.config.ui.default_limit),
    );

    output(&TaskListResponse { tasks }, flags.format)
}
