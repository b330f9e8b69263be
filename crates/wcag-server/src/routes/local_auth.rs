//! Token endpoints served when accounts live in [`MemoryIdentity`].
//!
//! They answer in the hosted auth service's shape so `wcag auth login`
//! works against a local `wcag serve`.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bearer_token;
use crate::identity::{LocalSession, MemoryIdentity};

/// Lifetime advertised to clients. Local tokens last until revoked; the
/// figure only paces client-side refreshes.
pub const LOCAL_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Deserialize)]
pub struct GrantQuery {
    #[serde(default)]
    grant_type: String,
}

#[derive(Debug, Deserialize)]
pub struct GrantBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Debug, Serialize)]
struct TokenBody {
    access_token: String,
    token_type: &'static str,
    expires_in: i64,
    refresh_token: String,
    user: TokenUser,
}

#[derive(Debug, Serialize)]
struct TokenUser {
    id: String,
    email: String,
}

impl From<LocalSession> for TokenBody {
    fn from(session: LocalSession) -> Self {
        Self {
            access_token: session.access_token,
            token_type: "bearer",
            expires_in: LOCAL_TOKEN_TTL_SECS,
            refresh_token: session.refresh_token,
            user: TokenUser {
                id: session.user.id,
                email: session.user.email,
            },
        }
    }
}

fn grant_error(code: &str, description: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": code, "error_description": description })),
    )
        .into_response()
}

/// `POST /auth/v1/token?grant_type=password|refresh_token`
pub async fn token(
    State(identity): State<Arc<MemoryIdentity>>,
    Query(query): Query<GrantQuery>,
    body: Result<Json<GrantBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return grant_error("invalid_request", "request body must be JSON");
    };
    let session = match query.grant_type.as_str() {
        "password" => identity.start_session(&body.email, &body.password).await,
        "refresh_token" => identity.refresh_session(&body.refresh_token).await,
        other => {
            return grant_error(
                "unsupported_grant_type",
                &format!("unsupported grant type '{other}'"),
            );
        }
    };
    match session {
        Some(session) => {
            tracing::info!(user_id = %session.user.id, grant = %query.grant_type, "local token issued");
            Json(TokenBody::from(session)).into_response()
        }
        None if query.grant_type == "password" => {
            grant_error("invalid_grant", "Invalid login credentials")
        }
        None => grant_error("invalid_grant", "Invalid Refresh Token"),
    }
}

/// `POST /auth/v1/logout`
pub async fn logout(State(identity): State<Arc<MemoryIdentity>>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "no_authorization", "error_description": "bearer token required" })),
        )
            .into_response();
    };
    if !identity.end_session(token).await {
        tracing::debug!("logout with an unknown token");
    }
    StatusCode::NO_CONTENT.into_response()
}
