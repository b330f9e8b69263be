use std::sync::Arc;

use anyhow::Context;
use wcag_auth::{FileSessionStore, HostedAuth, KeyringSessionStore, SessionManager};
use wcag_client::CardStoreClient;
use wcag_config::{PreferenceStore, Preferences, WcagConfig};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui::Ui;

/// Session manager as wired for the CLI.
pub type Sessions = SessionManager<HostedAuth, KeyringSessionStore>;

/// Configuration, rendering state, and constructors for the resources
/// commands need.
///
/// Nothing is connected up front: offline commands never touch the network.
pub struct AppContext {
    pub config: WcagConfig,
    pub ui: Ui,
}

impl AppContext {
    /// Context with plain table output; see [`Self::for_terminal`].
    #[must_use]
    pub fn new(config: WcagConfig) -> Self {
        Self {
            config,
            ui: Ui::plain(OutputFormat::Table),
        }
    }

    /// Context whose rendering follows `flags`, the terminal, and the
    /// persisted theme.
    #[must_use]
    pub fn for_terminal(config: WcagConfig, flags: &GlobalFlags) -> Self {
        let mut ctx = Self::new(config);
        ctx.ui = Ui::detect(flags, ctx.startup_preferences().theme);
        ctx
    }

    pub fn client(&self) -> anyhow::Result<Arc<CardStoreClient>> {
        let client = CardStoreClient::from_config(&self.config.backend)
            .context("card store is unavailable (set WCAG_BACKEND__PROJECT_URL)")?;
        if self.config.backend.anon_key.is_empty() {
            tracing::debug!("backend.anon_key is empty; public endpoints are called without a bearer");
        }
        Ok(Arc::new(client))
    }

    pub fn sessions(&self) -> anyhow::Result<Sessions> {
        let client = self.client()?;
        let provider = HostedAuth::from_config(&self.config)?;
        let store = KeyringSessionStore::new(
            self.config.auth.keyring_service.clone(),
            FileSessionStore::at_default_path()?,
        );
        Ok(SessionManager::new(
            provider,
            store,
            client,
            self.config.auth.expiry_buffer_secs,
        ))
    }

    pub fn preferences(&self) -> anyhow::Result<PreferenceStore> {
        let path = self
            .config
            .general
            .resolved_preferences_path()
            .context("no config directory: set WCAG_GENERAL__PREFERENCES_PATH")?;
        PreferenceStore::load(path).map_err(anyhow::Error::from)
    }

    /// Preferences for rendering; unreadable files fall back to defaults.
    #[must_use]
    pub fn startup_preferences(&self) -> Preferences {
        match self.preferences() {
            Ok(store) => store.get(),
            Err(error) => {
                tracing::warn!("{error:#}; using default preferences");
                Preferences::default()
            }
        }
    }
}
