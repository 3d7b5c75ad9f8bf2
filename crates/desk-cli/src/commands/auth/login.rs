use std::io::BufRead;

use anyhow::Context;
use desk_core::enums::UserRole;
use desk_core::responses::LoginRequest;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    role: UserRole,
    name: Option<String>,
    user_id: Option<String>,
    registered_exam: Option<String>,
    dashboard: &'static str,
    token_source: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role: UserRole = parse_enum(&args.role)?;
    let password = match &args.password {
        Some(password) => password.clone(),
        None if args.password_stdin => read_password(std::io::stdin().lock())?,
        None => anyhow::bail!("auth login: pass --password or --password-stdin"),
    };
    let request = login_request(&args.email, password, role)?;

    let response = ctx.client.login(&request).await?;
    ctx.session
        .login_as(&response)
        .context("failed to store session")?;
    ctx.refresh_client();
    tracing::info!(role = %response.user_type, "logged in");

    output(
        &AuthLoginResponse {
            authenticated: true,
            role: response.user_type,
            name: response.name,
            user_id: response.user_id,
            registered_exam: response.olympiad_exam_name,
            dashboard: response.user_type.dashboard(),
            token_source: ctx.session.detect_source().map(|s| s.to_string()),
        },
        flags.format,
    )
}

fn login_request(email: &str, password: String, role: UserRole) -> anyhow::Result<LoginRequest> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        anyhow::bail!("Email and password are required");
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password,
        user_type: role,
    })
}

/// First line of `reader`, without the line ending.
pub(super) fn read_password(mut reader: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
