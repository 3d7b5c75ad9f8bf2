use std::path::Path;

use desk_core::entities::BulkRegistrationReport;
use desk_core::enums::RowStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct RegisterStudentsResponse {
    headline: String,
    registered: Vec<String>,
    skipped: Vec<String>,
    failed: Vec<String>,
    report: BulkRegistrationReport,
}

impl From<BulkRegistrationReport> for RegisterStudentsResponse {
    fn from(report: BulkRegistrationReport) -> Self {
        Self {
            headline: report.headline(),
            registered: report.lines(RowStatus::Success),
            skipped: report.lines(RowStatus::Skipped),
            failed: report.lines(RowStatus::Failed),
            report,
        }
    }
}

pub async fn run(file: &Path, exam: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::check_csv(file)?;
    if exam.trim().is_empty() {
        anyhow::bail!("Please select an exam");
    }

    let report = Progress::wrap(
        "Uploading student CSV",
        "Upload processed",
        ctx.client.register_students(file, exam.trim()),
    )
    .await?;
    tracing::info!(
        total = report.total,
        registered = report.success_count,
        skipped = report.duplicate_count,
        failed = report.error_count,
        "bulk registration finished"
    );

    output(&RegisterStudentsResponse::from(report), flags.format)
}
