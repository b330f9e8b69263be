use clap::{Args, Subcommand};
use wcag_core::Role;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with e-mail and password.
    Login(AuthLoginArgs),
    /// Create an account (does not sign in).
    Signup(AuthSignupArgs),
    /// Sign out and forget the stored session.
    Logout,
    /// Show who is signed in.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct PasswordArgs {
    /// Password on the command line (visible in shell history).
    #[arg(long, conflicts_with = "password_stdin", required_unless_present = "password_stdin")]
    pub password: Option<String>,
    /// Read the password from the first line of stdin.
    #[arg(long)]
    pub password_stdin: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[command(flatten)]
    pub password: PasswordArgs,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    #[command(flatten)]
    pub password: PasswordArgs,
    /// Display name.
    #[arg(long, default_value = "")]
    pub name: String,
    /// Account role: user or admin.
    #[arg(long, default_value = "user")]
    pub role: Role,
}
