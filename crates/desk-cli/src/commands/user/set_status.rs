use desk_core::entities::User;
use desk_core::enums::AccountStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserStatusResponse {
    message: String,
    user: User,
}

pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status: AccountStatus = parse_enum(status)?;
    let user = ctx.client.set_user_status(id, status).await?;
    output(
        &UserStatusResponse {
            message: format!("User status changed to {status}"),
            user,
        },
        flags.format,
    )
}
