use std::path::Path;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(file: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::check_csv(file)?;
    let summary = Progress::wrap(
        "Uploading sales CSV",
        "Upload processed",
        ctx.client.register_sales(file),
    )
    .await?;
    output(&summary, flags.format)
}
