//! # wcag-config
//!
//! Layered configuration loading for WCAG Consulta using figment, plus the
//! persisted accessibility preferences.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WCAG_*` prefix, `__` as separator)
//! 2. Project-level `.wcag/config.toml`
//! 3. User-level `~/.config/wcag/config.toml`
//! 4. Built-in defaults
//!
//! `WCAG_BACKEND__ANON_KEY` maps to `backend.anon_key`,
//! `WCAG_SERVER__KV_BACKEND` to `server.kv_backend`, and so on.
//!
//! ```no_run
//! use wcag_config::WcagConfig;
//!
//! let config = WcagConfig::load().expect("config");
//! if config.backend.is_configured() {
//!     println!("card store: {}", config.backend.function_base_url().expect("url"));
//! }
//! ```

mod auth;
mod backend;
mod error;
mod general;
pub mod preferences;
mod server;

pub use auth::AuthConfig;
pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use preferences::{FontSize, PreferenceStore, Preferences};
pub use server::{KvBackend, ServerConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment prefix of every configuration variable.
pub const ENV_PREFIX: &str = "WCAG_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WcagConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl WcagConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// `.env` is not read here; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".wcag/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wcag").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = WcagConfig::default();
        assert!(!config.backend.is_configured());
        assert!(!config.server.is_hosted_configured());
        assert_eq!(config.server.kv_backend, KvBackend::Memory);
        assert_eq!(config.general.health_poll_secs, 30);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: WcagConfig = WcagConfig::figment().extract()?;
            assert_eq!(config.backend.timeout_secs, 10);
            assert_eq!(config.server.bind, "127.0.0.1:8787");
            assert_eq!(config.auth.expiry_buffer_secs, 60);
            Ok(())
        });
    }
}
