//! Roles, statuses, priorities, and other closed value sets for ExamDesk.
//!
//! Each enum serializes with the exact spelling the backend uses on the wire
//! (`in-progress`, `Easy`, `sales`, ...). `FromStr` is lenient: it ignores
//! case and accepts `_` in place of `-`, so CLI input like `IN_PROGRESS`
//! still parses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Resolve `raw` against the wire names of `all`.
fn parse_variant<T: Copy>(
    field: &'static str,
    raw: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T, CoreError> {
    let normalized = raw.trim().replace('_', "-").to_ascii_lowercase();
    all.iter()
        .copied()
        .find(|variant| as_str(*variant).eq_ignore_ascii_case(&normalized))
        .ok_or_else(|| CoreError::InvalidValue {
            field,
            value: raw.to_string(),
            expected: all
                .iter()
                .map(|variant| as_str(*variant))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Account type. Decides which dashboard a user lands on and which views
/// they may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    School,
    Admin,
    Sales,
}

impl UserRole {
    pub const ALL: &'static [Self] = &[Self::Student, Self::School, Self::Admin, Self::Sales];

    /// Roles offered by the public signup wizard.
    pub const SIGNUP: &'static [Self] = &[Self::Admin, Self::School];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::School => "school",
            Self::Admin => "admin",
            Self::Sales => "sales",
        }
    }

    /// Capitalized name used in headings ("Create Your School Account").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::School => "School",
            Self::Admin => "Admin",
            Self::Sales => "Sales",
        }
    }

    /// The dashboard a user of this role lands on after login or signup.
    #[must_use]
    pub const fn dashboard(self) -> &'static str {
        match self {
            Self::Student => "student-dashboard",
            Self::School => "school-dashboard",
            Self::Admin => "admin-dashboard",
            Self::Sales => "sales-dashboard",
        }
    }

    /// Whether this role may open an account through the signup wizard.
    #[must_use]
    pub fn can_self_register(self) -> bool {
        Self::SIGNUP.contains(&self)
    }

    /// Admins see inactive exams; every other role sees only active ones.
    #[must_use]
    pub const fn sees_inactive_exams(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("role", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Exam difficulty. Capitalized on the wire.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: &'static [Self] = &[Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("difficulty", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// ExamStatus
// ---------------------------------------------------------------------------

/// Publication status of an exam.
///
/// ```text
/// active ⇄ inactive   (PATCH /api/exams/{id}/status flips it)
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ExamStatus {
    #[default]
    Active,
    Inactive,
}

impl ExamStatus {
    pub const ALL: &'static [Self] = &[Self::Active, Self::Inactive];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// The status the backend toggle produces from this one.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("exam status", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// TaskPriority
// ---------------------------------------------------------------------------

/// Priority of an assigned task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    pub const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("priority", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Progress of an assigned task. The assignee may move it to any state;
/// the backend does not enforce an order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: &'static [Self] = &[Self::Pending, Self::InProgress, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("task status", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// AccountStatus
// ---------------------------------------------------------------------------

/// Whether a user account may log in. Deactivated accounts get a 403 on login.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl AccountStatus {
    pub const ALL: &'static [Self] = &[Self::Active, Self::Inactive];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("account status", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// RowStatus
// ---------------------------------------------------------------------------

/// Outcome of one CSV row in a bulk registration upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Success,
    Skipped,
    Failed,
}

impl RowStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: TaskStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(back, TaskStatus::InProgress);
    }

    #[test]
    fn difficulty_is_capitalized_on_the_wire() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"Hard\"");
    }

    #[test]
    fn from_str_is_lenient_about_case_and_separators() {
        assert_eq!("IN_PROGRESS".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" Sales ".parse::<UserRole>().unwrap(), UserRole::Sales);
    }

    #[test]
    fn from_str_lists_expected_values() {
        let err = "principal".parse::<UserRole>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid role 'principal': expected one of student, school, admin, sales"
        );
    }

    #[test]
    fn only_admin_and_school_can_self_register() {
        assert!(UserRole::Admin.can_self_register());
        assert!(UserRole::School.can_self_register());
        assert!(!UserRole::Student.can_self_register());
        assert!(!UserRole::Sales.can_self_register());
    }

    #[test]
    fn exam_status_toggle_flips() {
        assert_eq!(ExamStatus::Active.toggled(), ExamStatus::Inactive);
        assert_eq!(ExamStatus::Inactive.toggled(), ExamStatus::Active);
    }
}
