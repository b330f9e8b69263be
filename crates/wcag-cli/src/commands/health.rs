//! Card-store status indicator.
//!
//! `--watch` fires a probe on every tick of a fixed interval, whether or not
//! the previous probe has finished; probes report back over a channel.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use wcag_client::CardStoreClient;

use crate::cli::root_commands::HealthArgs;
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::output::{output, table};
use crate::progress::Progress;
use crate::ui::Ui;

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub connected: bool,
    pub status: &'static str,
    pub checked_at: DateTime<Utc>,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One `GET /health`. Any failure or a non-"ok" body is "disconnected".
pub async fn probe(client: &CardStoreClient) -> HealthReport {
    let (connected, error) = match client.health().await {
        Ok(response) if response.is_ok() => (true, None),
        Ok(response) => (false, Some(format!("unexpected status '{}'", response.status))),
        Err(error) => (false, Some(error.to_string())),
    };
    HealthReport {
        connected,
        status: if connected { "connected" } else { "disconnected" },
        checked_at: Utc::now(),
        endpoint: client.base_url().to_string(),
        error,
    }
}

pub async fn handle(args: &HealthArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let client = ctx.client()?;
    if args.watch {
        let secs = args.interval.unwrap_or(ctx.config.general.health_poll_secs).max(1);
        return watch(client, Duration::from_secs(secs), &ctx.ui).await;
    }

    let spinner = Progress::spinner(&ctx.ui, "checking card store");
    let report = probe(&client).await;
    spinner.finish_clear();
    let connected = report.connected;
    output(&report, &ctx.ui)?;
    if connected {
        Ok(())
    } else {
        anyhow::bail!("card store is unreachable")
    }
}

async fn watch(client: Arc<CardStoreClient>, period: Duration, ui: &Ui) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::channel::<HealthReport>(16);
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tracing::debug!(?period, "watching card store health");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let client = Arc::clone(&client);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let report = probe(&client).await;
                    // The receiver is gone only after Ctrl+C.
                    let _ = tx.send(report).await;
                });
            }
            Some(report) = rx.recv() => print_report(&report, ui)?,
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for Ctrl+C")?;
                break;
            }
        }
    }
    Ok(())
}

fn print_report(report: &HealthReport, ui: &Ui) -> anyhow::Result<()> {
    if ui.format != OutputFormat::Table {
        return output(report, ui);
    }
    println!("{}", status_line(report, ui));
    Ok(())
}

fn status_line(report: &HealthReport, ui: &Ui) -> String {
    let status = match table::cell_style(report.status, ui.theme) {
        Some(code) if ui.table_color => format!("\u{1b}[{code}m{}\u{1b}[0m", report.status),
        _ => report.status.to_string(),
    };
    let checked = report
        .checked_at
        .with_timezone(&chrono::Local)
        .to_rfc3339_opts(SecondsFormat::Secs, false);
    match &report.error {
        Some(error) => format!("{checked}  {status}  ({error})"),
        None => format!("{checked}  {status}"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::net::TcpListener;
    use wcag_client::CardStoreClient;
    use wcag_server::{AppState, router};

    use super::*;

    const PREFIX: &str = "/make-server-6cf82b18";

    #[tokio::test]
    async fn probe_reports_connected_for_running_store() {
        let (state, _kv, _identity) = AppState::in_memory();
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            wcag_server::serve(listener, router(state, PREFIX))
                .await
                .expect("serve");
        });
        let client = CardStoreClient::new(format!("http://{addr}{PREFIX}"), "", Duration::from_secs(5))
            .expect("client");

        let report = probe(&client).await;
        assert!(report.connected);
        assert_eq!(report.status, "connected");
        assert!(report.error.is_none());
    }

    #[tokio::test]
    async fn probe_reports_disconnected_for_closed_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let client = CardStoreClient::new(format!("http://{addr}"), "", Duration::from_secs(2))
            .expect("client");

        let report = probe(&client).await;
        assert!(!report.connected);
        assert_eq!(report.status, "disconnected");
        assert!(report.error.is_some());
        assert!(!status_line(&report, &Ui::plain(OutputFormat::Table)).contains('\u{1b}'));
    }
}
