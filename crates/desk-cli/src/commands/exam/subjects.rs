use desk_core::filter::{self, ExamQuery};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubjectsResponse {
    subjects: Vec<String>,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let exams = ctx.client.list_exams_or_empty().await;
    let visible = ExamQuery::for_role(ctx.viewer_role()).apply(&exams);
    output(
        &SubjectsResponse {
            subjects: filter::subjects(&visible),
        },
        flags.format,
    )
}
