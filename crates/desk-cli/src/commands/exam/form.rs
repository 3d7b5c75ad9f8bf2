use anyhow::Context;
use chrono::Utc;
use desk_core::entities::Exam;
use desk_core::forms::{DraftSession, ExamDraft, ItemKey, KeyedList};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::exam::ExamFormArgs;
use crate::commands::shared::notice::{self, NoticeView};
use crate::commands::shared::parse::{parse_enum, split_indexed, split_titled, to_index};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExamSaveResponse {
    notice: Option<NoticeView>,
    exam: Option<Exam>,
}

/// Copy the given flags onto `draft`.
///
/// List edits address items by their position before this call: topic
/// replacements and removals resolve positions to item keys first, then
/// removals run, then new items are appended.
pub fn apply(draft: &mut ExamDraft, form: &ExamFormArgs) -> anyhow::Result<()> {
    let texts = [
        (&mut draft.title, &form.title),
        (&mut draft.subject, &form.subject),
        (&mut draft.date, &form.date),
        (&mut draft.duration, &form.duration),
        (&mut draft.image, &form.image),
        (&mut draft.description, &form.description),
        (&mut draft.registration_deadline, &form.registration_deadline),
        (&mut draft.eligibility, &form.eligibility),
        (&mut draft.fee, &form.fee),
        (&mut draft.location, &form.location),
    ];
    for (field, value) in texts {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }
    if let Some(difficulty) = &form.difficulty {
        draft.difficulty = parse_enum(difficulty)?;
    }
    if let Some(status) = &form.status {
        draft.status = parse_enum(status)?;
    }
    if let Some(featured) = form.featured {
        draft.featured = featured;
    }

    let dropped_sections = keys_at(&draft.syllabus, &form.drop_sections, "syllabus section")?;
    let dropped_resources = keys_at(&draft.resources, &form.drop_resources, "resource group")?;
    let dropped_faqs = keys_at(&draft.faqs, &form.drop_faqs, "FAQ entry")?;

    for raw in &form.section_topics {
        let (index, topics) = split_indexed(raw)?;
        let key = key_at(&draft.syllabus, index, "syllabus section")?;
        draft.set_section_topics(key, &topics)?;
    }
    for raw in &form.resource_items {
        let (index, items) = split_indexed(raw)?;
        let key = key_at(&draft.resources, index, "resource group")?;
        draft.set_resource_items(key, &items)?;
    }

    for key in dropped_sections {
        draft.syllabus.remove(key);
    }
    for key in dropped_resources {
        draft.resources.remove(key);
    }
    for key in dropped_faqs {
        draft.faqs.remove(key);
    }

    for raw in &form.sections {
        let (title, topics) = split_titled(raw, ':')?;
        draft.add_section(title, &topics);
    }
    for raw in &form.resources {
        let (title, items) = split_titled(raw, ':')?;
        draft.add_resource(title, &items);
    }
    for raw in &form.faqs {
        let (question, answer) = split_titled(raw, '|')?;
        draft.add_faq(question, answer);
    }
    Ok(())
}

fn key_at<T>(list: &KeyedList<T>, index: usize, what: &str) -> anyhow::Result<ItemKey> {
    list.key_at(index)
        .with_context(|| format!("no {what} at position {}", index + 1))
}

fn keys_at<T>(list: &KeyedList<T>, positions: &[usize], what: &str) -> anyhow::Result<Vec<ItemKey>> {
    positions
        .iter()
        .map(|position| key_at(list, to_index(*position)?, what))
        .collect()
}

/// Send the draft as one create or update request and print the outcome.
///
/// The backend answers without the saved exam, so it is fetched again: by
/// ID after an edit, by title after a create.
pub async fn submit(draft: ExamDraft, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payload = draft.to_payload()?;
    let id = draft.id.clone();
    let mut session = DraftSession::open(draft, notice::ttl(ctx.config.ui.notice_secs));

    let result = match &id {
        Some(id) => ctx.client.update_exam(id, &payload).await,
        None => ctx.client.create_exam(&payload).await,
    };
    let now = Utc::now();
    if let Err(error) = result {
        session.fail(error.to_string(), now);
        return Err(error).context("failed to save exam");
    }

    let message = if id.is_some() {
        "Exam updated successfully"
    } else {
        "Exam created successfully"
    };
    session.succeed(message, now);

    let exam = match &id {
        Some(id) => ctx.client.get_exam(id).await.ok(),
        None => ctx
            .client
            .list_exams_or_empty()
            .await
            .into_iter()
            .rev()
            .find(|exam| exam.title == payload.title),
    };

    output(
        &ExamSaveResponse {
            notice: notice::visible(&session, Utc::now()),
            exam,
        },
        flags.format,
    )
}
