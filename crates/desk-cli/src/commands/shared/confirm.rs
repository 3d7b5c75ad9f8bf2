use chrono::Utc;
use desk_core::forms::Notice;

/// Destructive commands stand in for the confirmation prompt with `--yes`.
pub fn require_confirmation(yes: bool, question: &str) -> anyhow::Result<()> {
    if yes {
        return Ok(());
    }
    let notice = Notice::question(question, Utc::now());
    anyhow::bail!("{} Re-run with --yes to confirm.", notice.message)
}

#[cfg(test)]
mod tests {
    use super::require_confirmation;

    #[test]
    fn refuses_without_yes() {
        let err = require_confirmation(false, "Delete this exam?").expect_err("should refuse");
        assert_eq!(err.to_string(), "Delete this exam? Re-run with --yes to confirm.");
        assert!(require_confirmation(true, "Delete this exam?").is_ok());
    }
}
