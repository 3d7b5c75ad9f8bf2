use anyhow::{Context, bail};
use chrono::Utc;
use desk_core::forms::{DraftSession, MockTestDraft, MockTestPayload, OPTIONS_PER_QUESTION};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::mock_test::MockTestFormArgs;
use crate::commands::shared::notice::{self, NoticeView};
use crate::commands::shared::parse::split_indexed;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MockTestCreateResponse {
    notice: Option<NoticeView>,
    mock_test: MockTestPayload,
}

/// Build a draft from the flags. The blank first question is filled by the
/// first `--question`; later ones are appended.
fn build(form: &MockTestFormArgs) -> anyhow::Result<MockTestDraft> {
    let mut draft = MockTestDraft::new();
    draft.title.clone_from(&form.title);
    if let Some(description) = &form.description {
        draft.description.clone_from(description);
    }
    if let Some(duration) = form.duration {
        draft.duration_minutes = duration;
    }

    let mut keys = Vec::with_capacity(form.questions.len());
    for (position, raw) in form.questions.iter().enumerate() {
        let (text, options) = split_question(raw)?;
        let key = match draft.questions.key_at(0) {
            Some(first) if position == 0 => first,
            _ => draft.add_question(),
        };
        draft.set_question_text(key, text)?;
        for (index, option) in options.into_iter().enumerate() {
            draft.set_option(key, index, option)?;
        }
        keys.push(key);
    }

    for raw in &form.answers {
        let (index, letter) = split_indexed(raw)?;
        let key = keys
            .get(index)
            .copied()
            .with_context(|| format!("no question at position {}", index + 1))?;
        draft.set_correct_answer(key, option_index(&letter)?)?;
    }
    Ok(draft)
}

/// `"TEXT|A|B|C|D"` as the question text and its four options.
fn split_question(raw: &str) -> anyhow::Result<(String, Vec<String>)> {
    let mut parts = raw.split('|').map(|part| part.trim().to_string());
    let text = parts.next().unwrap_or_default();
    let options: Vec<String> = parts.collect();
    if options.len() != OPTIONS_PER_QUESTION {
        bail!(
            "invalid question '{raw}': expected TEXT followed by {OPTIONS_PER_QUESTION} options separated by '|'"
        );
    }
    Ok((text, options))
}

/// `A`-`D` or `1`-`4` as a 0-based option index.
fn option_index(raw: &str) -> anyhow::Result<usize> {
    let raw = raw.trim();
    let index = match raw.to_ascii_uppercase().as_str() {
        "A" | "1" => 0,
        "B" | "2" => 1,
        "C" | "3" => 2,
        "D" | "4" => 3,
        _ => bail!("invalid answer '{raw}': expected A-D or 1-4"),
    };
    Ok(index)
}

pub async fn run(form: &MockTestFormArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = build(form)?;
    let payload = draft.to_payload()?;
    let mut session = DraftSession::open(draft, notice::ttl(ctx.config.ui.notice_secs));

    let result = ctx.client.create_mock_test(&payload).await;
    let now = Utc::now();
    if let Err(error) = result {
        session.fail(error.to_string(), now);
        return Err(error).context("failed to create mock test");
    }
    session.succeed("Mock test created successfully", now);

    output(
        &MockTestCreateResponse {
            notice: notice::visible(&session, Utc::now()),
            mock_test: payload,
        },
        flags.format,
    )
}
