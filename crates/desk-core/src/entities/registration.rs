use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RowStatus;

/// Result of uploading a student CSV for an exam.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BulkRegistrationReport {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub duplicate_count: u32,
    #[serde(default)]
    pub error_count: u32,
    #[serde(default)]
    pub processed_students: Vec<ProcessedRow>,
}

/// Per-row outcome reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedRow {
    pub row: u32,
    pub status: RowStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RegisteredStudent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegisteredStudent {
    pub name: String,
    pub email: String,
}

impl BulkRegistrationReport {
    /// One-line summary: `Registered 3/5 students`.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("Registered {}/{} students", self.success_count, self.total)
    }

    /// Human-readable lines for every row with the given outcome.
    #[must_use]
    pub fn lines(&self, status: RowStatus) -> Vec<String> {
        self.processed_students
            .iter()
            .filter(|row| row.status == status)
            .map(ProcessedRow::describe)
            .collect()
    }
}

impl ProcessedRow {
    #[must_use]
    pub fn describe(&self) -> String {
        match self.status {
            RowStatus::Success => match &self.data {
                Some(student) => format!(
                    "Row {}: Registered {} ({})",
                    self.row, student.name, student.email
                ),
                None => format!("Row {}: Registered", self.row),
            },
            RowStatus::Skipped => format!(
                "Row {}: Skipped - {} (ID: {})",
                self.row,
                self.reason.as_deref().unwrap_or("duplicate"),
                self.existing_id.as_deref().unwrap_or("-"),
            ),
            RowStatus::Failed => format!(
                "Row {}: Failed - {}",
                self.row,
                self.error.as_deref().unwrap_or("unknown error"),
            ),
        }
    }
}
