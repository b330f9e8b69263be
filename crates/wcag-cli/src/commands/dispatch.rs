use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx).await,
        Commands::Prefs { action } => commands::prefs::handle(&action, ctx),
        Commands::Auth { action } => commands::auth::handle(&action, ctx).await,
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags).await,
        Commands::Health(args) => commands::health::handle(&args, ctx).await,
        Commands::Serve(args) => commands::serve::handle(&args, ctx, flags).await,
    }
}
