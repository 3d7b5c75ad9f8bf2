use chrono::{DateTime, Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, ExamStatus};

/// An exam as published by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub title: String,
    pub subject: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: ExamStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub syllabus: Vec<SyllabusSection>,
    #[serde(default)]
    pub resources: Vec<ResourceGroup>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Exam {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ExamStatus::Active
    }

    /// Calendar date of the exam.
    ///
    /// Accepts plain `YYYY-MM-DD` (what the exam form sends) and RFC 3339
    /// timestamps (what the backend stores). `None` for anything else.
    #[must_use]
    pub fn exam_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    }

    /// Whether the exam falls in the given calendar month.
    #[must_use]
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.exam_date()
            .is_some_and(|date| date.year() == year && date.month() == month)
    }
}

/// One syllabus section: a heading plus its topics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyllabusSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// A titled group of study resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResourceGroup {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Faq {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam_on(date: &str) -> Exam {
        serde_json::from_value(serde_json::json!({
            "_id": "e1",
            "title": "Math Olympiad",
            "subject": "Math",
            "date": date,
        }))
        .unwrap()
    }

    #[test]
    fn accepts_mongo_style_id_and_fills_defaults() {
        let exam = exam_on("2025-05-02");
        assert_eq!(exam.id, "e1");
        assert_eq!(exam.difficulty, Difficulty::Easy);
        assert_eq!(exam.status, ExamStatus::Active);
        assert!(exam.syllabus.is_empty());
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 5, 2);
        assert_eq!(exam_on("2025-05-02").exam_date(), expected);
        assert_eq!(exam_on("2025-05-02T09:30:00.000Z").exam_date(), expected);
        assert_eq!(exam_on("next week").exam_date(), None);
    }

    #[test]
    fn month_check_uses_year_too() {
        let exam = exam_on("2025-05-02");
        assert!(exam.is_in_month(2025, 5));
        assert!(!exam.is_in_month(2024, 5));
        assert!(!exam.is_in_month(2025, 6));
    }
}
