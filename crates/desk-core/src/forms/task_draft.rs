use std::path::PathBuf;

use chrono::NaiveDate;

use crate::entities::Task;
use crate::enums::{TaskPriority, TaskStatus, UserRole};
use crate::errors::CoreError;

/// In-progress task assignment form.
///
/// Sent as multipart: the text fields below plus one `attachments` part per
/// local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub assigned_by: String,
    pub assigned_to: String,
    pub assigned_date: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub attachments: Vec<PathBuf>,
}

impl TaskDraft {
    /// Blank draft authored by `author_name`. Admin authors are recorded as
    /// `"Admin"`.
    #[must_use]
    pub fn new(author_role: UserRole, author_name: &str, today: NaiveDate) -> Self {
        let assigned_by = if author_role == UserRole::Admin || author_name.trim().is_empty() {
            "Admin".to_string()
        } else {
            author_name.trim().to_string()
        };
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            assigned_by,
            assigned_to: String::new(),
            assigned_date: today.format("%Y-%m-%d").to_string(),
            due_date: String::new(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Pending,
            school_id: None,
            school_name: None,
            attachments: Vec::new(),
        }
    }

    /// Prefill from an existing task for a full edit. Existing attachments
    /// stay on the server; only new local files are sent.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            assigned_by: task.assigned_by.clone(),
            assigned_to: task.assigned_to.clone(),
            assigned_date: task.assigned_date.clone(),
            due_date: task.due_date.clone(),
            priority: task.priority,
            status: task.status,
            school_id: task.school_id.clone(),
            school_name: task.school_name.clone(),
            attachments: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.assigned_to.trim().is_empty() {
            return Err(CoreError::validation(
                "Please select a team member to assign the task to",
            ));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("Title is required"));
        }
        Ok(())
    }

    /// Multipart text fields in wire order. Blank optional fields are omitted.
    pub fn text_fields(&self) -> Result<Vec<(&'static str, String)>, CoreError> {
        self.validate()?;
        let mut fields = vec![
            ("title", self.title.trim().to_string()),
            ("description", self.description.clone()),
            ("assignedBy", self.assigned_by.clone()),
            ("assignedTo", self.assigned_to.trim().to_string()),
            ("assignedDate", self.assigned_date.clone()),
            ("priority", self.priority.as_str().to_string()),
            ("status", self.status.as_str().to_string()),
        ];
        if !self.due_date.trim().is_empty() {
            fields.push(("dueDate", self.due_date.trim().to_string()));
        }
        if let Some(id) = self.school_id.as_deref().filter(|s| !s.is_empty()) {
            fields.push(("schoolId", id.to_string()));
        }
        if let Some(name) = self.school_name.as_deref().filter(|s| !s.is_empty()) {
            fields.push(("schoolName", name.to_string()));
        }
        Ok(fields)
    }
}
