use serde::Serialize;
use wcag_core::Role;

use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthSignupResponse {
    created: bool,
    user_id: String,
    email: String,
    role: Role,
    next: &'static str,
}

pub async fn handle(args: &AuthSignupArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let password = super::read_password(&args.password)?;
    let sessions = ctx.sessions()?;
    let profile = sessions
        .sign_up(&args.email, &password, &args.name, args.role)
        .await?;

    output(
        &AuthSignupResponse {
            created: true,
            user_id: profile.id,
            email: profile.email,
            role: profile.role,
            next: "sign in with `wcag auth login`",
        },
        &ctx.ui,
    )
}
