use desk_core::entities::Exam;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExamDetailResponse {
    exam: Exam,
    exam_date: Option<String>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let exam = ctx.client.get_exam(id).await?;
    let exam_date = exam.exam_date().map(|date| date.format("%B %-d, %Y").to_string());
    output(&ExamDetailResponse { exam, exam_date }, flags.format)
}
