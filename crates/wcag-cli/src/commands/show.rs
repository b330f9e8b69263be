use crate::cli::root_commands::ShowArgs;
use crate::commands::catalog::load_index;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &ShowArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let loaded = load_index(ctx, args.offline).await;
    let criterion = loaded
        .index
        .get(&args.id)
        .ok_or_else(|| anyhow::anyhow!("criterion '{}' not found", args.id.trim()))?;
    output(criterion, &ctx.ui)
}
