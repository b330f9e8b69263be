//! Hosted authentication provider.
//!
//! Speaks the GoTrue token API that backs the project:
//! `POST /token?grant_type=password`, `POST /token?grant_type=refresh_token`
//! and `POST /logout`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use wcag_config::WcagConfig;

use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::session::{Session, SessionIdentity};

/// Issues, renews, and revokes sessions.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for a wrong e-mail or
    /// password.
    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> Result<Session, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::SessionExpired`] when the refresh token is no
    /// longer accepted.
    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError>;

    /// Revoke the session server-side.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Http`] or [`AuthError::Provider`] on failure.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GoTrueError {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

impl GoTrueError {
    fn code(&self) -> &str {
        self.error_code
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or_default()
    }

    fn message(&self) -> Option<&str> {
        self.msg
            .as_deref()
            .or(self.error_description.as_deref())
            .or(self.error.as_deref())
    }
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .or_else(|| {
                self.expires_in
                    .map(|secs| Utc::now() + TimeDelta::seconds(secs))
            })
            .or_else(|| {
                TokenClaims::decode(&self.access_token)
                    .ok()
                    .and_then(|claims| claims.expires_at())
            })
            // Unknown lifetime: treat as already due so the next use refreshes.
            .unwrap_or_else(Utc::now);
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: SessionIdentity {
                id: self.user.id,
                email: self.user.email.unwrap_or_default(),
            },
        }
    }
}

pub struct HostedAuth {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl HostedAuth {
    /// # Errors
    ///
    /// Returns [`AuthError::Http`] if the HTTP client fails to build.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wcag-consulta/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] when neither `auth.url` nor
    /// `backend.project_url` is set.
    pub fn from_config(config: &WcagConfig) -> Result<Self, AuthError> {
        if config.auth.url.trim().is_empty() && config.backend.project_url.trim().is_empty() {
            return Err(AuthError::Provider(
                "auth is not configured: set WCAG_BACKEND__PROJECT_URL or WCAG_AUTH__URL".into(),
            ));
        }
        Self::new(
            config.auth.resolved_url(&config.backend),
            config.backend.anon_key.clone(),
            Duration::from_secs(config.backend.timeout_secs),
        )
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.post(format!("{}{path}", self.base_url));
        if self.anon_key.is_empty() {
            builder
        } else {
            builder.header("apikey", &self.anon_key)
        }
    }

    async fn token_grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<Result<Session, (u16, GoTrueError)>, AuthError> {
        let resp = self
            .request(&format!(
                "/token?grant_type={}",
                urlencoding::encode(grant_type)
            ))
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            let token: TokenResponse = resp
                .json()
                .await
                .map_err(|e| AuthError::Provider(format!("unexpected token response: {e}")))?;
            return Ok(Ok(token.into_session()));
        }
        let text = resp.text().await.unwrap_or_default();
        let error = serde_json::from_str(&text).unwrap_or_else(|_| GoTrueError {
            msg: Some(text).filter(|t| !t.trim().is_empty()),
            ..GoTrueError::default()
        });
        Ok(Err((status.as_u16(), error)))
    }
}

#[async_trait]
impl AuthProvider for HostedAuth {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "email": email.trim(), "password": password });
        match self.token_grant("password", body).await? {
            Ok(session) => {
                tracing::debug!(user = %session.user.id, "signed in");
                Ok(session)
            }
            Err((400, error))
                if matches!(error.code(), "invalid_grant" | "invalid_credentials") =>
            {
                Err(AuthError::InvalidCredentials)
            }
            Err((status, error)) => Err(AuthError::Provider(format!(
                "sign-in failed ({status}): {}",
                error.message().unwrap_or("no details")
            ))),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        match self.token_grant("refresh_token", body).await? {
            Ok(session) => {
                tracing::debug!(user = %session.user.id, "session refreshed");
                Ok(session)
            }
            Err((400 | 401 | 403, error)) => {
                tracing::debug!(code = error.code(), "refresh token rejected");
                Err(AuthError::SessionExpired)
            }
            Err((status, error)) => Err(AuthError::Provider(format!(
                "refresh failed ({status}): {}",
                error.message().unwrap_or("no details")
            ))),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let resp = self
            .request("/logout")
            .bearer_auth(access_token)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AuthError::Provider(format!("sign-out failed ({status})")))
        }
    }
}
