use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{TaskPriority, TaskStatus, UserRole};

/// A unit of work an admin assigns to a sales team member.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assigned_by: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub assigned_date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
}

impl Task {
    /// Attachment URLs under `/uploads/` are served by the backend itself and
    /// must be resolved against the API base URL.
    #[must_use]
    pub fn attachment_url(attachment: &Attachment, base_url: &str) -> String {
        if attachment.url.starts_with("/uploads/") {
            format!("{}{}", base_url.trim_end_matches('/'), attachment.url)
        } else {
            attachment.url.clone()
        }
    }
}

/// A file stored alongside a task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

/// A discussion entry on a task, written by the admin or the assignee.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author_name: String,
    pub author_type: UserRole,
    #[serde(default)]
    pub created_at: String,
}
