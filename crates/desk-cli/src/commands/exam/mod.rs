mod create;
mod delete;
mod form;
mod get;
mod list;
mod subjects;
mod toggle_status;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExamCommands;
use crate::context::AppContext;

/// Handle `examdesk exam <subcommand>`.
pub async fn handle(
    action: &ExamCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ExamCommands::List {
            search,
            subject,
            difficulty,
            featured,
            month,
        } => {
            let filters = list::ListFilters {
                search: search.as_deref(),
                subject: subject.as_deref(),
                difficulty: difficulty.as_deref(),
                featured: *featured,
                month: month.as_deref(),
            };
            list::run(&filters, ctx, flags).await
        }
        ExamCommands::Get { id } => get::run(id, ctx, flags).await,
        ExamCommands::Subjects => subjects::run(ctx, flags).await,
        ExamCommands::Create(form) => create::run(form, ctx, flags).await,
        ExamCommands::Update { id, form } => update::run(id, form, ctx, flags).await,
        ExamCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
        ExamCommands::ToggleStatus { id } => toggle_status::run(id, ctx, flags).await,
    }
}
