use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::require_confirmation;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserDeleteResponse {
    id: String,
    deleted: bool,
}

pub async fn run(id: &str, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_confirmation(yes, "Are you sure you want to delete this user?")?;
    ctx.client.delete_user(id).await?;
    output(
        &UserDeleteResponse {
            id: id.to_string(),
            deleted: true,
        },
        flags.format,
    )
}
