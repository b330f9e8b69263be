//! Card-store client error types.

use thiserror::Error;

/// Errors returned by [`crate::CardStoreClient`]. Every variant renders as a
/// line that can be shown to the user as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure (DNS, connect, timeout, TLS).
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Required fields missing, locally or as reported by the server.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing, invalid or expired bearer token.
    #[error("authorization required: {0}")]
    Unauthorized(String),

    /// Valid token without the required role.
    #[error("access denied: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The resource already exists (duplicate e-mail on sign-up).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The client could not be built from configuration.
    #[error(transparent)]
    Config(#[from] wcag_config::ConfigError),
}

impl StoreError {
    /// Whether the server rejected the caller's token.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}
