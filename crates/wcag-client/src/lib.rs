//! # wcag-client
//!
//! HTTP client for the card-store function endpoint:
//! - `GET /health`, `POST /init`
//! - `GET|POST /wcag-cards`, `PUT|DELETE /wcag-cards/:id`
//! - `GET /profile`, `POST /signup`
//!
//! Each operation issues exactly one request against the fixed base URL. No
//! retries; callers re-fetch the list after a successful mutation.

pub mod cards;
pub mod health;
pub mod profile;

mod error;
mod http;

pub use error::StoreError;

use std::time::Duration;

use wcag_config::BackendConfig;

pub struct CardStoreClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl CardStoreClient {
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
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
    /// Returns [`StoreError::Config`] when `project_url` is not set.
    pub fn from_config(config: &BackendConfig) -> Result<Self, StoreError> {
        Self::new(
            config.function_base_url()?,
            config.anon_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Bearer for endpoints that only need the public key.
    fn anon_bearer(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.anon_key.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.anon_key)
        }
    }
}

/// Reject a blank user token before any request is built.
fn require_token(token: &str) -> Result<&str, StoreError> {
    let token = token.trim();
    if token.is_empty() {
        Err(StoreError::Unauthorized(
            "sign in to perform this action".to_string(),
        ))
    } else {
        Ok(token)
    }
}
