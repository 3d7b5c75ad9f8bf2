//! Task endpoints.
//!
//! Creation and full edits are multipart (text fields plus one
//! `attachments` part per file); status changes and comments are JSON. Every
//! mutation returns the server's full task, which replaces local state.

use std::path::Path;

use desk_core::entities::Task;
use desk_core::enums::TaskStatus;
use desk_core::forms::TaskDraft;
use desk_core::responses::{NewComment, TaskStatusUpdate};
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// `GET /api/tasks`, optionally only those assigned to one user.
    pub async fn list_tasks(&self, assigned_to: Option<&str>) -> Result<Vec<Task>, ApiError> {
        let path = match assigned_to {
            Some(user) => format!("/api/tasks?assignedTo={}", urlencoding::encode(user)),
            None => "/api/tasks".to_string(),
        };
        self.send_json(self.request(Method::GET, &path)).await
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        let path = format!("/api/tasks/{}", segment(id));
        self.send_json(self.request(Method::GET, &path)).await
    }

    /// `POST /api/tasks` as multipart.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let form = task_form(draft).await?;
        self.send_json(self.request(Method::POST, "/api/tasks").multipart(form))
            .await
    }

    /// Full edit: `PUT /api/tasks/{id}` as multipart.
    pub async fn update_task(&self, id: &str, draft: &TaskDraft) -> Result<Task, ApiError> {
        let form = task_form(draft).await?;
        let path = format!("/api/tasks/{}", segment(id));
        self.send_json(self.request(Method::PUT, &path).multipart(form))
            .await
    }

    /// Status-only change: `PUT /api/tasks/{id}` with `{ status }`.
    pub async fn set_task_status(&self, id: &str, status: TaskStatus) -> Result<Task, ApiError> {
        let path = format!("/api/tasks/{}", segment(id));
        let body = TaskStatusUpdate { status };
        self.send_json(self.request(Method::PUT, &path).json(&body))
            .await
    }

    /// `POST /api/tasks/{id}/comments`; returns the updated task.
    pub async fn add_comment(&self, id: &str, comment: &NewComment) -> Result<Task, ApiError> {
        let path = format!("/api/tasks/{}/comments", segment(id));
        self.send_json(self.request(Method::POST, &path).json(comment))
            .await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/tasks/{}", segment(id));
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}

async fn task_form(draft: &TaskDraft) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in draft.text_fields()? {
        form = form.text(name, value);
    }
    for path in &draft.attachments {
        form = form.part("attachments", file_part(path).await?);
    }
    Ok(form)
}

/// Read a local file into a multipart part named after the file.
pub(crate) async fn file_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ApiError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
    Ok(Part::bytes(bytes).file_name(file_name))
}
