use desk_core::entities::Exam;
use desk_core::filter::{self, ExamQuery};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::{parse_month, parse_optional};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExamListResponse {
    exams: Vec<Exam>,
}

pub struct ListFilters<'a> {
    pub search: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub difficulty: Option<&'a str>,
    pub featured: bool,
    pub month: Option<&'a str>,
}

pub async fn run(filters: &ListFilters<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = ExamQuery::for_role(ctx.viewer_role())
        .search(filters.search.unwrap_or_default())
        .subject(filters.subject.map(str::to_string))
        .difficulty(parse_optional(filters.difficulty)?);
    let month = filters.month.map(parse_month).transpose()?;

    let fetched = ctx.client.list_exams_or_empty().await;
    let mut exams = select(&fetched, &query, filters.featured, month);
    let total = truncate(
        &mut exams,
        effective_limit(flags.limit, ctx.config.ui.default_limit),
    );
    tracing::debug!(fetched = fetched.len(), matched = total, "exam list filtered");

    output(&ExamListResponse { exams }, flags.format)
}

/// Query first, then the optional featured and month narrowing.
fn select(exams: &[Exam], query: &ExamQuery, featured: bool, month: Option<(i32, u32)>) -> Vec<Exam> {
    let mut selected = query.apply(exams);
    if featured {
        selected = filter::featured(&selected);
    }
    if let Some((year, month)) = month {
        selected = filter::upcoming_in_month(&selected, year, month);
    }
    selected
}
