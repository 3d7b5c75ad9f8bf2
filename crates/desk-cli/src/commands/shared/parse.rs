use std::str::FromStr;

use anyhow::Context;
use desk_core::CoreError;
use desk_core::enums::TaskStatus;

/// Parse a wire enum from CLI input (case-insensitive, `_` or `-`).
pub fn parse_enum<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = CoreError>,
{
    Ok(raw.parse::<T>()?)
}

pub fn parse_optional<T>(raw: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    raw.map(parse_enum).transpose()
}

/// Task status filter where `all` (or nothing) means no filter.
pub fn parse_status_filter(raw: Option<&str>) -> anyhow::Result<Option<TaskStatus>> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(value) => parse_enum(value).map(Some),
    }
}

/// `2025-06` as `(2025, 6)`.
pub fn parse_month(raw: &str) -> anyhow::Result<(i32, u32)> {
    let (year, month) = raw
        .trim()
        .split_once('-')
        .with_context(|| format!("invalid month '{raw}': expected YYYY-MM"))?;
    let year = year
        .parse::<i32>()
        .with_context(|| format!("invalid year in '{raw}'"))?;
    let month = month
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .with_context(|| format!("invalid month in '{raw}': expected 01-12"))?;
    Ok((year, month))
}

/// Split `"Title: rest"` at the first separator.
pub fn split_titled(raw: &str, separator: char) -> anyhow::Result<(String, String)> {
    let (title, rest) = raw
        .split_once(separator)
        .with_context(|| format!("invalid entry '{raw}': expected TITLE{separator} VALUES"))?;
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("invalid entry '{raw}': title is empty");
    }
    Ok((title.to_string(), rest.trim().to_string()))
}

/// Split `"N=rest"` where `N` is a 1-based position. Returns a 0-based index.
pub fn split_indexed(raw: &str) -> anyhow::Result<(usize, String)> {
    let (position, rest) = raw
        .split_once('=')
        .with_context(|| format!("invalid entry '{raw}': expected N=VALUES"))?;
    let index = to_index(
        position
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid position in '{raw}'"))?,
    )?;
    Ok((index, rest.trim().to_string()))
}

/// 1-based position to 0-based index.
pub fn to_index(position: usize) -> anyhow::Result<usize> {
    position
        .checked_sub(1)
        .context("positions start at 1")
}

#[cfg(test)]
mod tests {
    use desk_core::enums::{Difficulty, TaskStatus};

    use super::*;

    #[test]
    fn parses_lenient_enum_values() {
        let status: TaskStatus = parse_enum("in_progress").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);
        let difficulty: Option<Difficulty> =
            parse_optional(Some("HARD")).expect("difficulty should parse");
        assert_eq!(difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<TaskStatus>("done").expect_err("should fail");
        assert!(err.to_string().contains("invalid task status 'done'"));
    }

    #[test]
    fn all_clears_the_status_filter() {
        assert_eq!(parse_status_filter(Some("all")).expect("parses"), None);
        assert_eq!(parse_status_filter(None).expect("parses"), None);
        assert_eq!(
            parse_status_filter(Some("completed")).expect("parses"),
            Some(TaskStatus::Completed)
        );
    }

    #[test]
    fn month_must_be_in_range() {
        assert_eq!(parse_month("2025-06").expect("parses"), (2025, 6));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("June").is_err());
    }

    #[test]
    fn titled_and_indexed_entries() {
        assert_eq!(
            split_titled("Algebra: linear, quadratic", ':').expect("parses"),
            ("Algebra".to_string(), "linear, quadratic".to_string())
        );
        assert!(split_titled(": topics", ':').is_err());
        assert_eq!(
            split_indexed("2=a, b").expect("parses"),
            (1, "a, b".to_string())
        );
        assert!(split_indexed("0=a").is_err());
    }
}
