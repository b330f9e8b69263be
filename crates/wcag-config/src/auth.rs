//! Hosted authentication provider settings.

use serde::{Deserialize, Serialize};

use crate::BackendConfig;

const fn default_expiry_buffer_secs() -> i64 {
    60
}

fn default_keyring_service() -> String {
    "wcag-consulta".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Auth API base. Empty means `<project_url>/auth/v1`.
    #[serde(default)]
    pub url: String,

    /// Refresh a session this many seconds before it expires.
    #[serde(default = "default_expiry_buffer_secs")]
    pub expiry_buffer_secs: i64,

    /// OS keychain service name for the persisted session.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            expiry_buffer_secs: default_expiry_buffer_secs(),
            keyring_service: default_keyring_service(),
        }
    }
}

impl AuthConfig {
    /// Auth API base URL, derived from the backend project when unset.
    #[must_use]
    pub fn resolved_url(&self, backend: &BackendConfig) -> String {
        if self.url.trim().is_empty() {
            format!("{}/auth/v1", backend.project_url.trim().trim_end_matches('/'))
        } else {
            self.url.trim().trim_end_matches('/').to_string()
        }
    }
}
