use desk_auth::SessionSource;
use desk_core::enums::UserRole;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    role: Option<UserRole>,
    name: Option<String>,
    user_id: Option<String>,
    registered_exam: Option<String>,
    dashboard: Option<&'static str>,
    token_source: Option<String>,
    api: String,
    note: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session.session();
    let source = ctx.session.detect_source();
    let note = match (session, source) {
        (None, _) => Some("no session found; run `examdesk auth login`".to_string()),
        (Some(_), Some(SessionSource::Env)) => {
            Some("session comes from EXAMDESK_SESSION__* and is not persisted".to_string())
        }
        _ => None,
    };

    output(
        &AuthStatusResponse {
            authenticated: session.is_some(),
            role: session.map(|s| s.role),
            name: session.and_then(|s| s.user_name.clone()),
            user_id: session.and_then(|s| s.user_id.clone()),
            registered_exam: session.and_then(|s| s.registered_exam.clone()),
            dashboard: session.map(|s| s.role.dashboard()),
            token_source: source.map(|s| s.to_string()),
            api: ctx.client.base_url().to_string(),
            note,
        },
        flags.format,
    )
}
