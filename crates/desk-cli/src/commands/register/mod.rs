mod sales;
mod students;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RegisterCommands;
use crate::context::AppContext;

/// Handle `examdesk register <subcommand>`.
pub async fn handle(
    action: &RegisterCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_session()?;
    match action {
        RegisterCommands::Students { file, exam } => students::run(file, exam, ctx, flags).await,
        RegisterCommands::Sales { file } => sales::run(file, ctx, flags).await,
    }
}

/// Bulk uploads only accept CSV files that exist.
fn check_csv(path: &std::path::Path) -> anyhow::Result<()> {
    if !path.is_file() {
        anyhow::bail!("CSV file not found: {}", path.display());
    }
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        anyhow::bail!("Please upload a CSV file: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::check_csv;

    #[test]
    fn csv_files_are_accepted_case_insensitively() {
        let mut file = tempfile::Builder::new()
            .suffix(".CSV")
            .tempfile()
            .expect("temp file");
        writeln!(file, "name,email").expect("write header");
        assert!(check_csv(file.path()).is_ok());
    }

    #[test]
    fn other_extensions_are_rejected() {
        let file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .expect("temp file");
        let err = check_csv(file.path()).expect_err("not a csv");
        assert!(err.to_string().starts_with("Please upload a CSV file"));
    }

    #[test]
    fn missing_files_are_reported() {
        let err = check_csv(std::path::Path::new("/nope/students.csv")).expect_err("missing");
        assert!(err.to_string().starts_with("CSV file not found"));
    }
}
