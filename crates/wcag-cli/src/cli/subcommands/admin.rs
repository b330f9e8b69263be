use clap::{Args, Subcommand};
use wcag_core::Level;

#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List the custom cards in the store.
    List,
    /// Create a custom card.
    Create(CreateCardArgs),
    /// Change fields of an existing card.
    Update(UpdateCardArgs),
    /// Delete a card after confirmation.
    Delete {
        /// Store id of the card (see `wcag admin list`).
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct CreateCardArgs {
    #[arg(long, default_value = "")]
    pub criterion_id: String,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "A")]
    pub level: Level,
    #[arg(long, default_value = "")]
    pub principle: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Keyword; repeat for several.
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,
    #[arg(long, default_value = "")]
    pub url: String,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateCardArgs {
    /// Store id of the card.
    pub id: String,
    #[arg(long)]
    pub criterion_id: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub level: Option<Level>,
    #[arg(long)]
    pub principle: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Replace the keyword list; repeat for several.
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Option<Vec<String>>,
    #[arg(long)]
    pub url: Option<String>,
}
