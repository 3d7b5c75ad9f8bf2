use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Exam, Faq, ResourceGroup, SyllabusSection};
use crate::enums::{Difficulty, ExamStatus};
use crate::errors::CoreError;

use super::keyed::{ItemKey, KeyedList};

/// Split comma-separated input into trimmed, non-empty entries.
///
/// `"algebra, geometry ,,"` becomes `["algebra", "geometry"]`.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// In-progress exam form for both create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamDraft {
    /// Set when editing an existing exam.
    pub id: Option<String>,
    pub title: String,
    pub subject: String,
    pub date: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub image: String,
    pub status: ExamStatus,
    pub featured: bool,
    pub description: String,
    pub registration_deadline: String,
    pub eligibility: String,
    pub fee: String,
    pub location: String,
    pub syllabus: KeyedList<SyllabusSection>,
    pub resources: KeyedList<ResourceGroup>,
    pub faqs: KeyedList<Faq>,
}

impl Default for ExamDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            subject: String::new(),
            date: String::new(),
            duration: String::new(),
            difficulty: Difficulty::Easy,
            image: String::new(),
            status: ExamStatus::Active,
            featured: false,
            description: String::new(),
            registration_deadline: String::new(),
            eligibility: String::new(),
            fee: String::new(),
            location: String::new(),
            syllabus: KeyedList::new(),
            resources: KeyedList::new(),
            faqs: KeyedList::new(),
        }
    }
}

impl ExamDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill a draft from a fetched exam for the edit flow.
    #[must_use]
    pub fn from_exam(exam: &Exam) -> Self {
        Self {
            id: Some(exam.id.clone()),
            title: exam.title.clone(),
            subject: exam.subject.clone(),
            date: exam.exam_date().map_or_else(
                || exam.date.clone(),
                |date| date.format("%Y-%m-%d").to_string(),
            ),
            duration: exam.duration.clone(),
            difficulty: exam.difficulty,
            image: exam.image.clone(),
            status: exam.status,
            featured: exam.featured,
            description: exam.description.clone(),
            registration_deadline: exam.registration_deadline.clone().unwrap_or_default(),
            eligibility: exam.eligibility.clone().unwrap_or_default(),
            fee: exam.fee.clone().unwrap_or_default(),
            location: exam.location.clone().unwrap_or_default(),
            syllabus: exam.syllabus.iter().cloned().collect(),
            resources: exam.resources.iter().cloned().collect(),
            faqs: exam.faqs.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn add_section(&mut self, title: impl Into<String>, topics: &str) -> ItemKey {
        self.syllabus.push(SyllabusSection {
            title: title.into(),
            topics: split_list(topics),
        })
    }

    /// Replace a section's topics from comma-separated input.
    pub fn set_section_topics(&mut self, key: ItemKey, raw: &str) -> Result<(), CoreError> {
        let section = self
            .syllabus
            .get_mut(key)
            .ok_or_else(|| missing("syllabus section", key))?;
        section.topics = split_list(raw);
        Ok(())
    }

    pub fn add_resource(&mut self, title: impl Into<String>, items: &str) -> ItemKey {
        self.resources.push(ResourceGroup {
            title: title.into(),
            items: split_list(items),
        })
    }

    pub fn set_resource_items(&mut self, key: ItemKey, raw: &str) -> Result<(), CoreError> {
        let group = self
            .resources
            .get_mut(key)
            .ok_or_else(|| missing("resource group", key))?;
        group.items = split_list(raw);
        Ok(())
    }

    pub fn add_faq(&mut self, question: impl Into<String>, answer: impl Into<String>) -> ItemKey {
        self.faqs.push(Faq {
            question: question.into(),
            answer: answer.into(),
        })
    }

    /// Title and subject are required; everything else may be blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("Title is required"));
        }
        if self.subject.trim().is_empty() {
            return Err(CoreError::validation("Subject is required"));
        }
        Ok(())
    }

    /// Validate and package the draft into one request body.
    pub fn to_payload(&self) -> Result<ExamPayload, CoreError> {
        self.validate()?;
        Ok(ExamPayload {
            title: self.title.trim().to_string(),
            subject: self.subject.trim().to_string(),
            date: self.date.clone(),
            duration: self.duration.clone(),
            difficulty: self.difficulty,
            image: self.image.clone(),
            status: self.status,
            featured: self.featured,
            description: self.description.clone(),
            syllabus: self.syllabus.to_vec(),
            resources: self.resources.to_vec(),
            faqs: self.faqs.to_vec(),
            registration_deadline: non_blank(&self.registration_deadline),
            eligibility: non_blank(&self.eligibility),
            fee: non_blank(&self.fee),
            location: non_blank(&self.location),
        })
    }
}

fn missing(entity_type: &str, key: ItemKey) -> CoreError {
    CoreError::NotFound {
        entity_type: entity_type.to_string(),
        id: key.to_string(),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Body of `POST /api/exams/create` and `PUT /api/exams/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExamPayload {
    pub title: String,
    pub subject: String,
    pub date: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub image: String,
    pub status: ExamStatus,
    pub featured: bool,
    pub description: String,
    pub syllabus: Vec<SyllabusSection>,
    pub resources: Vec<ResourceGroup>,
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_the_blank_form() {
        let draft = ExamDraft::new();
        assert_eq!(draft.difficulty, Difficulty::Easy);
        assert_eq!(draft.status, ExamStatus::Active);
        assert!(!draft.featured);
        assert!(!draft.is_edit());
    }

    #[test]
    fn split_list_trims_and_drops_empty_entries() {
        assert_eq!(split_list("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn removing_a_faq_keeps_other_keys_valid() {
        let mut draft = ExamDraft::new();
        let first = draft.add_faq("When?", "May");
        let second = draft.add_faq("Where?", "Online");
        let third = draft.add_faq("Fee?", "None");

        draft.faqs.remove_at(0);
        assert_eq!(draft.faqs.len(), 2);
        assert_eq!(draft.faqs.get(first), None);
        assert_eq!(draft.faqs.position(second), Some(0));
        assert_eq!(draft.faqs.get(third).unwrap().question, "Fee?");
    }

    #[test]
    fn set_topics_on_unknown_section_is_not_found() {
        let mut draft = ExamDraft::new();
        let key = draft.add_section("Algebra", "linear, quadratic");
        draft.syllabus.remove(key);
        let err = draft.set_section_topics(key, "x").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn payload_requires_title_and_subject() {
        let mut draft = ExamDraft::new();
        assert_eq!(
            draft.to_payload().unwrap_err(),
            CoreError::Validation("Title is required".into())
        );
        draft.title = "Math Olympiad".into();
        assert_eq!(
            draft.to_payload().unwrap_err(),
            CoreError::Validation("Subject is required".into())
        );
    }

    #[test]
    fn payload_serializes_camel_case_and_skips_blank_extras() {
        let mut draft = ExamDraft::new();
        draft.title = "Math Olympiad".into();
        draft.subject = "Math".into();
        draft.registration_deadline = "2025-04-30".into();
        draft.add_section("Algebra", "linear, quadratic");

        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert_eq!(json["registrationDeadline"], "2025-04-30");
        assert_eq!(json["difficulty"], "Easy");
        assert_eq!(json["syllabus"][0]["topics"][1], "quadratic");
        assert!(json.get("fee").is_none());
    }

    #[test]
    fn from_exam_round_trips_lists_and_normalizes_date() {
        let exam: Exam = serde_json::from_value(serde_json::json!({
            "_id": "e7",
            "title": "Science Bowl",
            "subject": "Science",
            "date": "2025-05-02T00:00:00.000Z",
            "faqs": [{"question": "Q", "answer": "A"}],
            "fee": "100"
        }))
        .unwrap();

        let draft = ExamDraft::from_exam(&exam);
        assert_eq!(draft.id.as_deref(), Some("e7"));
        assert_eq!(draft.date, "2025-05-02");
        assert_eq!(draft.faqs.len(), 1);
        assert_eq!(draft.to_payload().unwrap().fee.as_deref(), Some("100"));
    }
}
