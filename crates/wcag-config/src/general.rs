//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_health_poll_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Interval of `wcag health --watch`.
    #[serde(default = "default_health_poll_secs")]
    pub health_poll_secs: u64,

    /// Preferences file. Empty means `<config_dir>/wcag/preferences.toml`.
    #[serde(default)]
    pub preferences_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            health_poll_secs: default_health_poll_secs(),
            preferences_path: String::new(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn resolved_preferences_path(&self) -> Option<PathBuf> {
        if self.preferences_path.trim().is_empty() {
            dirs::config_dir().map(|dir| dir.join("wcag").join("preferences.toml"))
        } else {
            Some(PathBuf::from(self.preferences_path.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.health_poll_secs, 30);
        assert!(config.preferences_path.is_empty());
    }

    #[test]
    fn explicit_preferences_path_is_used() {
        let config = GeneralConfig {
            preferences_path: "/tmp/prefs.toml".into(),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_preferences_path(),
            Some(PathBuf::from("/tmp/prefs.toml"))
        );
    }
}
