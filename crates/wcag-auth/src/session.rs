use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use wcag_core::UserProfile;

/// Account identity carried inside a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// Token bundle issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: SessionIdentity,
}

impl Session {
    /// Whether the access token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at <= Utc::now() + TimeDelta::seconds(buffer_secs)
    }
}

/// The signed-in user as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub profile: UserProfile,
    pub session: Session,
}

impl SessionUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.profile.is_admin()
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.profile.display_name(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// A persisted session is being loaded or refreshed.
    Restoring,
    Unauthenticated,
    Authenticated(SessionUser),
}
