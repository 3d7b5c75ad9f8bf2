//! Pure exam and task filtering.
//!
//! Every dashboard fetches the full collection once and narrows it here. None
//! of these functions touch the network or mutate their input, so applying the
//! same query twice yields the same list.

use std::collections::HashSet;

use crate::entities::{Exam, Task};
use crate::enums::{Difficulty, ExamStatus, TaskStatus, UserRole};

/// Which exam statuses a view may show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Admin views: active and inactive.
    #[default]
    All,
    /// Every non-admin view.
    ActiveOnly,
}

/// Search criteria for exam lists.
///
/// A default query matches every exam, so applying it returns the fetched list
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamQuery {
    pub search: String,
    pub subject: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub visibility: Visibility,
}

impl ExamQuery {
    /// Starting query for a role's exam view. Non-admins never see inactive
    /// exams.
    #[must_use]
    pub fn for_role(role: UserRole) -> Self {
        Self {
            visibility: if role.sees_inactive_exams() {
                Visibility::All
            } else {
                Visibility::ActiveOnly
            },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: Option<String>) -> Self {
        self.subject = subject.filter(|s| !s.trim().is_empty());
        self
    }

    #[must_use]
    pub const fn difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Title or subject contains the search term (ignoring case), and the
    /// subject and difficulty filters, when set, match exactly.
    #[must_use]
    pub fn matches(&self, exam: &Exam) -> bool {
        if self.visibility == Visibility::ActiveOnly && !exam.is_active() {
            return false;
        }

        let term = self.search.trim().to_lowercase();
        let text_match = term.is_empty()
            || exam.title.to_lowercase().contains(&term)
            || exam.subject.to_lowercase().contains(&term);

        let subject_match = self
            .subject
            .as_deref()
            .is_none_or(|subject| exam.subject == subject);
        let difficulty_match = self
            .difficulty
            .is_none_or(|difficulty| exam.difficulty == difficulty);

        text_match && subject_match && difficulty_match
    }

    /// Matching exams in their fetched order.
    #[must_use]
    pub fn apply(&self, exams: &[Exam]) -> Vec<Exam> {
        exams
            .iter()
            .filter(|exam| self.matches(exam))
            .cloned()
            .collect()
    }
}

/// Active exams flagged as featured.
#[must_use]
pub fn featured(exams: &[Exam]) -> Vec<Exam> {
    exams
        .iter()
        .filter(|exam| exam.is_active() && exam.featured)
        .cloned()
        .collect()
}

/// Distinct subjects in first-seen order.
#[must_use]
pub fn subjects(exams: &[Exam]) -> Vec<String> {
    let mut seen = HashSet::new();
    exams
        .iter()
        .filter(|exam| seen.insert(exam.subject.as_str()))
        .map(|exam| exam.subject.clone())
        .collect()
}

/// Exams dated within the given calendar month. Exams with unparseable
/// dates are left out.
#[must_use]
pub fn upcoming_in_month(exams: &[Exam], year: i32, month: u32) -> Vec<Exam> {
    exams
        .iter()
        .filter(|exam| exam.is_in_month(year, month))
        .cloned()
        .collect()
}

/// Active exams whose trimmed title equals the student's registered exam.
#[must_use]
pub fn registered_for(exams: &[Exam], registered_exam: &str) -> Vec<Exam> {
    let wanted = registered_exam.trim();
    if wanted.is_empty() {
        return Vec::new();
    }
    exams
        .iter()
        .filter(|exam| exam.is_active() && exam.title.trim() == wanted)
        .cloned()
        .collect()
}

/// Split into `(active, inactive)` for the management view.
#[must_use]
pub fn partition_by_status(exams: &[Exam]) -> (Vec<Exam>, Vec<Exam>) {
    exams
        .iter()
        .cloned()
        .partition(|exam| exam.status == ExamStatus::Active)
}

/// Criteria for task lists. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<String>,
}

impl TaskQuery {
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status == status)
            && self
                .assigned_to
                .as_deref()
                .is_none_or(|assignee| task.assigned_to == assignee)
    }

    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exam(id: &str, title: &str, subject: &str, status: ExamStatus) -> Exam {
        let mut exam: Exam = serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "subject": subject,
        }))
        .unwrap();
        exam.status = status;
        exam
    }

    fn ids(exams: &[Exam]) -> Vec<&str> {
        exams.iter().map(|exam| exam.id.as_str()).collect()
    }

    fn catalog() -> Vec<Exam> {
        let mut physics = exam("2", "Physics Cup", "Physics", ExamStatus::Active);
        physics.difficulty = Difficulty::Hard;
        physics.featured = true;
        vec![
            exam("1", "Math Olympiad", "Math", ExamStatus::Active),
            physics,
            exam("3", "Algebra Sprint", "Math", ExamStatus::Inactive),
        ]
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let query = ExamQuery::default().search("math");
        assert!(query.matches(&exam("1", "Math Olympiad", "Science", ExamStatus::Active)));
    }

    #[test]
    fn search_also_matches_subject() {
        let result = ExamQuery::default().search("PHYS").apply(&catalog());
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn empty_query_returns_fetched_list() {
        let exams = catalog();
        assert_eq!(ExamQuery::default().apply(&exams), exams);
    }

    #[test]
    fn non_admins_never_see_inactive_exams() {
        for role in [UserRole::Student, UserRole::School, UserRole::Sales] {
            let result = ExamQuery::for_role(role).apply(&catalog());
            assert!(result.iter().all(Exam::is_active), "{role} saw an inactive exam");
        }
        assert_eq!(ExamQuery::for_role(UserRole::Admin).apply(&catalog()).len(), 3);
    }

    #[rstest]
    #[case(ExamQuery::default().search("math"))]
    #[case(ExamQuery::default().subject(Some("Math".into())))]
    #[case(ExamQuery::default().difficulty(Some(Difficulty::Hard)))]
    #[case(ExamQuery::for_role(UserRole::Student).search("a"))]
    fn filtering_is_idempotent(#[case] query: ExamQuery) {
        let once = query.apply(&catalog());
        let twice = query.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn filters_combine_with_and() {
        let query = ExamQuery::default()
            .search("o")
            .subject(Some("Math".into()))
            .difficulty(Some(Difficulty::Easy));
        assert_eq!(ids(&query.apply(&catalog())), vec!["1"]);
    }

    #[test]
    fn blank_subject_filter_is_unset() {
        let query = ExamQuery::default().subject(Some("  ".into()));
        assert_eq!(query.subject, None);
    }

    #[test]
    fn subjects_are_unique_in_first_seen_order() {
        assert_eq!(subjects(&catalog()), vec!["Math", "Physics"]);
    }

    #[test]
    fn featured_requires_active() {
        let mut exams = catalog();
        exams[2].featured = true;
        assert_eq!(ids(&featured(&exams)), vec!["2"]);
    }

    #[test]
    fn registered_exam_matches_trimmed_title() {
        let mut exams = catalog();
        exams[0].title = "  Math Olympiad ".into();
        assert_eq!(ids(&registered_for(&exams, "Math Olympiad")), vec!["1"]);
        assert!(registered_for(&exams, "Algebra Sprint").is_empty());
        assert!(registered_for(&exams, "").is_empty());
    }

    #[test]
    fn upcoming_uses_calendar_month() {
        let mut exams = catalog();
        exams[0].date = "2025-05-20".into();
        exams[1].date = "2025-06-01T00:00:00Z".into();
        assert_eq!(ids(&upcoming_in_month(&exams, 2025, 5)), vec!["1"]);
    }

    #[test]
    fn partition_splits_active_and_inactive() {
        let (active, inactive) = partition_by_status(&catalog());
        assert_eq!(ids(&active), vec!["1", "2"]);
        assert_eq!(ids(&inactive), vec!["3"]);
    }

    #[test]
    fn task_query_filters_by_status() {
        let tasks: Vec<Task> = serde_json::from_value(serde_json::json!([
            {"_id": "a", "title": "Call", "status": "pending", "assignedTo": "u1"},
            {"_id": "b", "title": "Visit", "status": "completed", "assignedTo": "u2"}
        ]))
        .unwrap();
        let done = TaskQuery {
            status: Some(TaskStatus::Completed),
            ..TaskQuery::default()
        };
        assert_eq!(done.apply(&tasks)[0].id, "b");
        let mine = TaskQuery {
            assigned_to: Some("u1".into()),
            ..TaskQuery::default()
        };
        assert_eq!(mine.apply(&tasks)[0].id, "a");
        assert_eq!(TaskQuery::default().apply(&tasks).len(), 2);
    }
}
