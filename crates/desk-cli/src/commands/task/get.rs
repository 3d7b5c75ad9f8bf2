use desk_core::entities::Task;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TaskDetailResponse {
    task: Task,
    attachment_links: Vec<AttachmentLink>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct AttachmentLink {
    name: String,
    url: String,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_session()?;
    let task = ctx.client.get_task(id).await?;
    let attachment_links = links(&task, ctx.client.base_url());
    output(
        &TaskDetailResponse {
            task,
            attachment_links,
        },
        flags.format,
    )
}

fn links(task: &Task, base_url: &str) -> Vec<AttachmentLink> {
    task.attachments
        .iter()
        .map(|attachment| AttachmentLink {
            name: attachment.name.clone(),
            url: Task::attachment_url(attachment, base_url),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use desk_core::entities::Task;

    use super::{AttachmentLink, links};

    #[test]
    fn upload_paths_become_absolute_links() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "_id": "t1",
            "title": "Call schools",
            "attachments": [
                { "name": "list.csv", "url": "/uploads/list.csv", "type": "text/csv" },
                { "name": "brief.pdf", "url": "https://cdn.example.com/brief.pdf" }
            ]
        }))
        .expect("fixture should deserialize");

        assert_eq!(
            links(&task, "http://localhost:5000"),
            vec![
                AttachmentLink {
                    name: "list.csv".into(),
                    url: "http://localhost:5000/uploads/list.csv".into(),
                },
                AttachmentLink {
                    name: "brief.pdf".into(),
                    url: "https://cdn.example.com/brief.pdf".into(),
                },
            ]
        );
    }
}
