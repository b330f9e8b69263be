//! Account creation and token verification.

mod hosted;
mod memory;

pub use hosted::HostedIdentity;
pub use memory::{LocalSession, MemoryIdentity};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wcag_core::Role;

/// Metadata attached to an account at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Kept as the raw string; validated where it is read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// An account as known to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid or expired token")]
    InvalidToken,

    #[error("a user with this email address has already been registered")]
    DuplicateEmail,

    /// The provider refused the request (weak password, malformed e-mail).
    #[error("{0}")]
    Rejected(String),

    #[error("identity provider unreachable: {0}")]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    /// Create a confirmed account.
    async fn create_user(&self, account: NewAccount) -> Result<IdentityUser, IdentityError>;

    /// Resolve a bearer token to its account.
    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError>;
}
