use serde::Serialize;

use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    signed_out: bool,
    was_signed_in: bool,
}

pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let mut sessions = ctx.sessions()?;
    sessions.restore().await;
    let was_signed_in = sessions.user().is_some();
    sessions.sign_out().await?;
    output(
        &AuthLogoutResponse {
            signed_out: true,
            was_signed_in,
        },
        &ctx.ui,
    )
}
