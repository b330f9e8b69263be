use serde::Serialize;
use wcag_core::Role;

use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: String,
    name: String,
    role: Option<Role>,
    admin: bool,
    expires_at: String,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let password = super::read_password(&args.password)?;
    let mut sessions = ctx.sessions()?;
    let user = sessions.sign_in(&args.email, &password).await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: user.id.clone(),
            email: user.email.clone(),
            name: user.display_name().to_string(),
            role: user.profile.role,
            admin: user.is_admin(),
            expires_at: user.session.expires_at.to_rfc3339(),
        },
        &ctx.ui,
    )
}
