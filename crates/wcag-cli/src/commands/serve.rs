use anyhow::Context;
use tokio::net::TcpListener;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

pub async fn handle(args: &ServeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let server = &ctx.config.server;
    let bind = args.bind.as_deref().unwrap_or(&server.bind);

    let state = wcag_server::state_from_config(server)?;
    let local_auth = state.local_auth.is_some();
    let app = wcag_server::router(state, &server.route_prefix);
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    if !flags.quiet {
        let addr = listener.local_addr().context("failed to read listen address")?;
        eprintln!(
            "card store listening on http://{addr}{}",
            server.route_prefix.trim_end_matches('/')
        );
        if local_auth {
            eprintln!("accounts are local: sign in with WCAG_AUTH__URL=http://{addr}/auth/v1");
        }
    }
    wcag_server::serve(listener, app).await?;
    Ok(())
}
