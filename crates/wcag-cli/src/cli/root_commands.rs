use clap::{Args, Subcommand};

use super::subcommands::{AdminCommands, AuthCommands, PrefsCommands};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List criteria, filtered by an optional query.
    #[command(visible_alias = "search")]
    List(ListArgs),
    /// Show one criterion in full.
    Show(ShowArgs),
    /// Accessibility preferences (theme, font size).
    Prefs {
        #[command(subcommand)]
        action: PrefsCommands,
    },
    /// Sign in, sign up, sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Manage custom criterion cards (administrators only).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Probe the card store.
    Health(HealthArgs),
    /// Run the card-store endpoint locally.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text to look for; several words are searched as one phrase.
    pub query: Vec<String>,
    /// Skip the card store and list the standard catalog only.
    #[arg(long)]
    pub offline: bool,
    /// Include description, keywords and link.
    #[arg(long)]
    pub long: bool,
}

impl ListArgs {
    #[must_use]
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Dotted criterion id, e.g. 1.4.3.
    pub id: String,
    /// Skip the card store.
    #[arg(long)]
    pub offline: bool,
}

#[derive(Clone, Debug, Args)]
pub struct HealthArgs {
    /// Keep probing on a fixed interval until interrupted.
    #[arg(long)]
    pub watch: bool,
    /// Seconds between probes (defaults to general.health_poll_secs).
    #[arg(long, requires = "watch", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address (defaults to server.bind).
    #[arg(long)]
    pub bind: Option<String>,
}
