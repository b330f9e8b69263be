mod login;
mod logout;
mod signup;
mod status;

use std::io::BufRead;

use anyhow::Context;

use crate::cli::subcommands::AuthCommands;
use crate::cli::subcommands::auth::PasswordArgs;
use crate::context::AppContext;

/// Handle `wcag auth <subcommand>`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx).await,
        AuthCommands::Signup(args) => signup::handle(args, ctx).await,
        AuthCommands::Logout => logout::handle(ctx).await,
        AuthCommands::Status => status::handle(ctx).await,
    }
}

/// The password from `--password`, or the first line of stdin.
fn read_password(args: &PasswordArgs) -> anyhow::Result<String> {
    if let Some(password) = &args.password {
        return Ok(password.clone());
    }
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("empty password on stdin");
    }
    Ok(password)
}
