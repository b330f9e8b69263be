//! Remote card-store function endpoint.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_function_path() -> String {
    "/functions/v1/make-server-6cf82b18".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Hosted project URL, e.g. `https://abc.supabase.co`.
    #[serde(default)]
    pub project_url: String,

    /// Path of the function under `project_url`.
    #[serde(default = "default_function_path")]
    pub function_path: String,

    /// Public anonymous key, sent as bearer when no user token applies.
    #[serde(default)]
    pub anon_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            project_url: String::new(),
            function_path: default_function_path(),
            anon_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.project_url.is_empty() && !self.anon_key.is_empty()
    }

    /// Fixed base URL every card-store request is issued against.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `project_url` is empty.
    pub fn function_base_url(&self) -> Result<String, ConfigError> {
        if self.project_url.trim().is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "backend".into(),
                missing: "project_url".into(),
            });
        }
        let path = self.function_path.trim_matches('/');
        let base = self.project_url.trim().trim_end_matches('/');
        if path.is_empty() {
            Ok(base.to_string())
        } else {
            Ok(format!("{base}/{path}"))
        }
    }
}
