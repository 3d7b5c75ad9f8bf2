use desk_core::entities::User;
use desk_core::enums::UserRole;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserListResponse {
    users: Vec<User>,
    total: usize,
}

pub async fn run(
    search: Option<&str>,
    role: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role: Option<UserRole> = parse_optional(role)?;
    let mut users = ctx.client.list_users(search, role).await?;
    let total = truncate(
        &mut users,
        effective_limit(flags.limit, ctx.config.ui.default_limit),
    );
    output(&UserListResponse { users, total }, flags.format)
}
