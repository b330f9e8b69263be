//! # wcag-server
//!
//! The card-store function endpoint: health probe, store initialization,
//! sign-up, profile lookup, and admin-only card CRUD, all nested under a
//! configurable route prefix.
//!
//! Persistence goes through [`kv::KvStore`] and account handling through
//! [`identity::IdentityProvider`]; both have an in-memory and a hosted
//! implementation.

pub mod error;
pub mod identity;
pub mod kv;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wcag_config::{KvBackend, ServerConfig};

use identity::{HostedIdentity, IdentityError, IdentityProvider, MemoryIdentity};
use kv::{KvError, KvStore, MemoryKv, PostgrestKv};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server is not configured: {0}")]
    NotConfigured(String),

    #[error(transparent)]
    Kv(#[from] KvError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Build the router with every route nested under `route_prefix`.
///
/// An empty prefix (or `/`) mounts the routes at the root. With in-memory
/// accounts, `/auth/v1/token` and `/auth/v1/logout` are mounted at the root
/// as well.
pub fn router(state: AppState, route_prefix: &str) -> Router {
    let local_auth = state.local_auth.clone();
    let api = Router::new()
        .route("/health", get(routes::health))
        .route("/init", post(routes::init))
        .route("/signup", post(routes::signup))
        .route("/profile", get(routes::profile))
        .route(
            "/wcag-cards",
            get(routes::list_cards).post(routes::create_card),
        )
        .route(
            "/wcag-cards/{id}",
            put(routes::update_card).delete(routes::delete_card),
        )
        .with_state(state);

    let prefix = route_prefix.trim().trim_matches('/');
    let mut app = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(&format!("/{prefix}"), api)
    };
    if let Some(identity) = local_auth {
        app = app.merge(
            Router::new()
                .route("/auth/v1/token", post(routes::local_auth::token))
                .route("/auth/v1/logout", post(routes::local_auth::logout))
                .with_state(identity),
        );
    }

    app.layer(cors_layer()).layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .expose_headers([CONTENT_LENGTH])
        .max_age(Duration::from_secs(600))
}

/// Pick the key-value and identity backends named by `config`.
///
/// # Errors
///
/// Returns [`ServerError::NotConfigured`] when the hosted store is selected
/// without a project URL and service key.
pub fn state_from_config(config: &ServerConfig) -> Result<AppState, ServerError> {
    let kv: Arc<dyn KvStore> = match config.kv_backend {
        KvBackend::Memory => Arc::new(MemoryKv::new()),
        KvBackend::Hosted => {
            if !config.is_hosted_configured() {
                return Err(ServerError::NotConfigured(
                    "kv_backend = \"hosted\" needs server.supabase_url and server.service_role_key"
                        .to_string(),
                ));
            }
            Arc::new(PostgrestKv::new(
                &config.supabase_url,
                &config.service_role_key,
                &config.kv_table,
            )?)
        }
    };

    if config.is_hosted_configured() {
        let identity: Arc<dyn IdentityProvider> = Arc::new(HostedIdentity::new(
            &config.supabase_url,
            &config.service_role_key,
        )?);
        Ok(AppState::new(kv, identity))
    } else {
        tracing::warn!("no hosted auth configured; accounts live in memory and /auth/v1 is served locally");
        Ok(AppState::with_local_auth(kv, Arc::new(MemoryIdentity::new())))
    }
}

/// Serve `app` on `listener` until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns [`ServerError::Io`] if accepting connections fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "card store listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("card store shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
            Err(error) => {
                tracing::error!(%error, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(error) => {
                tracing::error!(%error, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
