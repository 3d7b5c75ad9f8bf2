/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> usize {
    let limit = global.unwrap_or(fallback);
    usize::try_from(limit).unwrap_or(usize::MAX)
}

/// Keep at most `limit` items, reporting how many matched before truncation.
pub fn truncate<T>(items: &mut Vec<T>, limit: usize) -> usize {
    let total = items.len();
    items.truncate(limit);
    total
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, truncate};

    #[test]
    fn global_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 20), 5);
    }

    #[test]
    fn fallback_used_when_unset() {
        assert_eq!(effective_limit(None, 20), 20);
    }

    #[test]
    fn truncate_reports_the_full_count() {
        let mut items = vec![1, 2, 3, 4];
        assert_eq!(truncate(&mut items, 2), 4);
        assert_eq!(items, vec![1, 2]);
    }
}
