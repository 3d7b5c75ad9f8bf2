use desk_auth::StoredSession;
use desk_core::entities::Comment;
use desk_core::enums::UserRole;
use desk_core::responses::NewComment;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TaskCommentResponse {
    task_id: String,
    comments: Vec<Comment>,
}

pub async fn run(id: &str, text: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let comment = new_comment(ctx.require_session()?, text)?;
    let task = ctx.client.add_comment(id, &comment).await?;
    output(
        &TaskCommentResponse {
            task_id: task.id,
            comments: task.comments,
        },
        flags.format,
    )
}

/// Comment authored by the logged-in user. Only admin and sales accounts
/// take part in task threads.
fn new_comment(session: &StoredSession, text: &str) -> anyhow::Result<NewComment> {
    if !matches!(session.role, UserRole::Admin | UserRole::Sales) {
        anyhow::bail!(
            "Only admin and sales users can comment on tasks (logged in as {})",
            session.role.label()
        );
    }
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Comment cannot be empty");
    }
    Ok(NewComment {
        text: text.to_string(),
        author_id: session.user_id.clone().unwrap_or_default(),
        author_name: session
            .user_name
            .clone()
            .unwrap_or_else(|| session.role.label().to_string()),
        author_type: session.role,
    })
}

#[cfg(test)]
mod tests {
    use desk_auth::StoredSession;
    use desk_core::enums::UserRole;

    use super::new_comment;

    #[test]
    fn author_falls_back_to_the_role_label() {
        let session = StoredSession::new("tok", UserRole::Sales);
        let comment = new_comment(&session, "  Called the school ").expect("valid comment");
        assert_eq!(comment.text, "Called the school");
        assert_eq!(comment.author_name, "Sales");
        assert_eq!(comment.author_type, UserRole::Sales);
    }

    #[test]
    fn students_and_schools_cannot_comment() {
        for role in [UserRole::Student, UserRole::School] {
            let session = StoredSession::new("tok", role);
            let err = new_comment(&session, "Any update?").expect_err("not a task role");
            assert!(
                err.to_string()
                    .starts_with("Only admin and sales users can comment on tasks"),
                "{err}"
            );
        }
    }

    #[test]
    fn blank_comment_is_rejected() {
        let session = StoredSession::new("tok", UserRole::Admin);
        assert!(new_comment(&session, "   ").is_err());
    }
}
