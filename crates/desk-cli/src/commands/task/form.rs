use anyhow::Context;
use chrono::Utc;
use desk_core::entities::Task;
use desk_core::forms::{DraftSession, TaskDraft};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::task::TaskFormArgs;
use crate::commands::shared::notice::{self, NoticeView};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct TaskSaveResponse {
    notice: Option<NoticeView>,
    task: Task,
}

/// Copy the given flags onto `draft`. Attachments are added to any already
/// queued.
pub fn apply(draft: &mut TaskDraft, form: &TaskFormArgs) -> anyhow::Result<()> {
    let texts = [
        (&mut draft.title, &form.title),
        (&mut draft.description, &form.description),
        (&mut draft.assigned_to, &form.assigned_to),
        (&mut draft.due_date, &form.due_date),
    ];
    for (field, value) in texts {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }
    if let Some(priority) = &form.priority {
        draft.priority = parse_enum(priority)?;
    }
    if let Some(status) = &form.status {
        draft.status = parse_enum(status)?;
    }
    if form.school_id.is_some() {
        draft.school_id.clone_from(&form.school_id);
    }
    if form.school_name.is_some() {
        draft.school_name.clone_from(&form.school_name);
    }
    for path in &form.attachments {
        if !path.is_file() {
            anyhow::bail!("attachment not found: {}", path.display());
        }
        draft.attachments.push(path.clone());
    }
    Ok(())
}

/// Validate, upload and print the saved task.
pub async fn submit(draft: TaskDraft, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    draft.validate()?;
    let id = draft.id.clone();
    let mut session = DraftSession::open(draft, notice::ttl(ctx.config.ui.notice_secs));
    let Some(draft) = session.draft() else {
        anyhow::bail!("task form was closed before submission");
    };

    let upload = async {
        match &id {
            Some(id) => ctx.client.update_task(id, draft).await,
            None => ctx.client.create_task(draft).await,
        }
    };
    let result = if draft.attachments.is_empty() {
        upload.await
    } else {
        Progress::wrap("Uploading task attachments", "Attachments uploaded", upload).await
    };

    let now = Utc::now();
    let task = match result {
        Ok(task) => task,
        Err(error) => {
            session.fail(error.to_string(), now);
            return Err(error).context("failed to save task");
        }
    };
    let message = if id.is_some() {
        "Task updated successfully"
    } else {
        "Task created successfully"
    };
    session.succeed(message, now);

    output(
        &TaskSaveResponse {
            notice: notice::visible(&session, Utc::now()),
            task,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use desk_core::enums::{TaskPriority, TaskStatus, UserRole};
    use desk_core::forms::TaskDraft;

    use super::apply;
    use crate::cli::subcommands::task::TaskFormArgs;

    fn blank() -> TaskDraft {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        TaskDraft::new(UserRole::Admin, "Priya", today)
    }

    #[test]
    fn flags_fill_the_draft() {
        let mut draft = blank();
        let form = TaskFormArgs {
            title: Some("Visit schools".into()),
            assigned_to: Some("u-42".into()),
            priority: Some("HIGH".into()),
            status: Some("in_progress".into()),
            school_name: Some("Green Valley".into()),
            ..TaskFormArgs::default()
        };
        apply(&mut draft, &form).expect("form applies");

        assert_eq!(draft.assigned_by, "Admin");
        assert_eq!(draft.assigned_date, "2025-06-01");
        assert_eq!(draft.priority, TaskPriority::High);
        assert_eq!(draft.status, TaskStatus::InProgress);
        assert_eq!(draft.school_name.as_deref(), Some("Green Valley"));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn missing_assignee_is_reported_first() {
        let mut draft = blank();
        apply(&mut draft, &TaskFormArgs::default()).expect("form applies");
        let err = draft.validate().expect_err("no assignee");
        assert_eq!(
            err.to_string(),
            "Please select a team member to assign the task to"
        );
    }

    #[test]
    fn missing_attachment_is_rejected() {
        let mut draft = blank();
        let form = TaskFormArgs {
            attachments: vec!["/definitely/not/here.pdf".into()],
            ..TaskFormArgs::default()
        };
        let err = apply(&mut draft, &form).expect_err("file missing");
        assert!(err.to_string().starts_with("attachment not found"));
    }

    #[test]
    fn existing_attachment_is_queued() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let mut draft = blank();
        let form = TaskFormArgs {
            attachments: vec![file.path().to_path_buf()],
            ..TaskFormArgs::default()
        };
        apply(&mut draft, &form).expect("form applies");
        assert_eq!(draft.attachments, vec![file.path().to_path_buf()]);
    }
}
