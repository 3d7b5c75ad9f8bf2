use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    was_authenticated: bool,
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let was_authenticated = ctx.session.is_authenticated();
    ctx.session.logout()?;
    ctx.refresh_client();
    output(
        &AuthLogoutResponse {
            cleared: true,
            was_authenticated,
        },
        flags.format,
    )
}
