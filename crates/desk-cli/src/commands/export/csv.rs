use std::path::{Path, PathBuf};

use anyhow::Context;
use desk_client::ExportQuery;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ExportCsvResponse {
    path: String,
    bytes: usize,
}

pub async fn run(
    role: Option<&str>,
    school: Option<&str>,
    target: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = ExportQuery {
        user_type: parse_optional(role)?,
        school_name: school.map(str::to_string),
    };

    let file = Progress::wrap(
        "Generating CSV export",
        "Export downloaded",
        ctx.client.export_csv(&query),
    )
    .await?;

    let path = resolve_target(target, &file.filename);
    tokio::fs::write(&path, &file.bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = file.bytes.len(), "export saved");

    output(
        &ExportCsvResponse {
            path: path.display().to_string(),
            bytes: file.bytes.len(),
        },
        flags.format,
    )
}

/// Where to save the download: inside `target` when it is a directory, at
/// `target` when it names a file, or under the server's name in the current
/// directory.
fn resolve_target(target: Option<&Path>, filename: &str) -> PathBuf {
    match target {
        Some(dir) if dir.is_dir() => dir.join(filename),
        Some(file) => file.to_path_buf(),
        None => PathBuf::from(filename),
    }
}
