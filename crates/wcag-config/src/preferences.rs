//! Persisted accessibility preferences (theme and root font size).
//!
//! Stored as a two-key TOML file (`theme`, `fontSize`), read once at startup
//! and rewritten on every change.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wcag_core::Theme;

use crate::ConfigError;

/// Root font size in pixels, always within [`FontSize::MIN`]..=[`FontSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct FontSize(u8);

impl FontSize {
    pub const MIN: u8 = 15;
    pub const MAX: u8 = 18;
    pub const DEFAULT: u8 = 16;

    /// Clamp any integer into the allowed range.
    #[must_use]
    pub fn clamped(px: i64) -> Self {
        let px = px.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u8::try_from(px).unwrap_or(Self::DEFAULT))
    }

    #[must_use]
    pub const fn px(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn increased(self) -> Self {
        if self.0 < Self::MAX { Self(self.0 + 1) } else { self }
    }

    #[must_use]
    pub const fn decreased(self) -> Self {
        if self.0 > Self::MIN { Self(self.0 - 1) } else { self }
    }

    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 >= Self::MAX
    }

    #[must_use]
    pub const fn is_min(self) -> bool {
        self.0 <= Self::MIN
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i64> for FontSize {
    fn from(px: i64) -> Self {
        Self::clamped(px)
    }
}

impl From<FontSize> for u8 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default, rename = "fontSize")]
    pub font_size: FontSize,
}

/// Preferences bound to their file. Every mutation is written through.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PreferenceStore {
    /// Read `path`, or start from defaults when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PreferencesIo`] if the file cannot be read and
    /// [`ConfigError::PreferencesFormat`] if it is not valid.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let prefs = match std::fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).map_err(|e| ConfigError::PreferencesFormat {
                path: path.clone(),
                reason: e.message().to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
            Err(source) => return Err(ConfigError::PreferencesIo { path, source }),
        };
        tracing::debug!(path = %path.display(), theme = %prefs.theme, font = %prefs.font_size, "preferences loaded");
        Ok(Self { path, prefs })
    }

    /// Defaults bound to `path`, without reading it.
    #[must_use]
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            prefs: Preferences::default(),
        }
    }

    #[must_use]
    pub const fn get(&self) -> Preferences {
        self.prefs
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::PreferencesIo`] if the file cannot be written.
    pub fn set_theme(&mut self, theme: Theme) -> Result<Preferences, ConfigError> {
        self.update(|prefs| prefs.theme = theme)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::PreferencesIo`] if the file cannot be written.
    pub fn increase_font(&mut self) -> Result<Preferences, ConfigError> {
        self.update(|prefs| prefs.font_size = prefs.font_size.increased())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::PreferencesIo`] if the file cannot be written.
    pub fn decrease_font(&mut self) -> Result<Preferences, ConfigError> {
        self.update(|prefs| prefs.font_size = prefs.font_size.decreased())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::PreferencesIo`] if the file cannot be written.
    pub fn set_font(&mut self, size: FontSize) -> Result<Preferences, ConfigError> {
        self.update(|prefs| prefs.font_size = size)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::PreferencesIo`] if the file cannot be written.
    pub fn reset_font(&mut self) -> Result<Preferences, ConfigError> {
        self.set_font(FontSize::default())
    }

    /// The in-memory state only changes once the file is written.
    fn update(&mut self, change: impl FnOnce(&mut Preferences)) -> Result<Preferences, ConfigError> {
        let mut next = self.prefs;
        change(&mut next);
        self.save(&next)?;
        self.prefs = next;
        Ok(next)
    }

    fn save(&self, prefs: &Preferences) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::PreferencesIo {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = toml::to_string(prefs).map_err(|e| ConfigError::PreferencesFormat {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        std::fs::write(&self.path, body).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn font_size_is_clamped() {
        assert_eq!(FontSize::clamped(3).px(), 15);
        assert_eq!(FontSize::clamped(40).px(), 18);
        assert_eq!(FontSize::clamped(17).px(), 17);
        assert_eq!(FontSize::default().px(), 16);
    }

    #[test]
    fn increase_and_decrease_stop_at_bounds() {
        let max = FontSize::clamped(18);
        assert!(max.is_max());
        assert_eq!(max.increased(), max);
        let min = FontSize::clamped(15);
        assert!(min.is_min());
        assert_eq!(min.decreased(), min);
        assert_eq!(FontSize::default().increased().px(), 17);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = PreferenceStore::load(dir.path().join("prefs.toml")).expect("load");
        assert_eq!(store.get(), Preferences::default());
    }

    #[test]
    fn changes_are_written_through_and_restored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("prefs.toml");

        let mut store = PreferenceStore::load(&path).expect("load");
        store.set_theme(Theme::HighContrast).expect("theme");
        store.increase_font().expect("font");
        store.increase_font().expect("font");
        store.increase_font().expect("font");

        let raw = std::fs::read_to_string(&path).expect("written");
        assert!(raw.contains("theme = \"high-contrast\""), "{raw}");
        assert!(raw.contains("fontSize = 18"), "{raw}");

        let restored = PreferenceStore::load(&path).expect("reload");
        assert_eq!(restored.get().theme, Theme::HighContrast);
        assert_eq!(restored.get().font_size.px(), 18);
    }

    #[test]
    fn out_of_range_file_value_is_clamped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "theme = \"dark\"\nfontSize = 42\n").expect("write");

        let store = PreferenceStore::load(&path).expect("load");
        assert_eq!(store.get().theme, Theme::Dark);
        assert_eq!(store.get().font_size.px(), 18);
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "theme = \"sepia\"\n").expect("write");

        let err = PreferenceStore::load(&path).expect_err("should fail");
        assert!(matches!(err, ConfigError::PreferencesFormat { .. }));
    }

    #[test]
    fn reset_returns_to_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = PreferenceStore::with_defaults(dir.path().join("p.toml"));
        store.decrease_font().expect("font");
        assert_eq!(store.get().font_size.px(), 15);
        store.reset_font().expect("reset");
        assert_eq!(store.get().font_size.px(), 16);
    }

    #[test]
    fn failed_write_leaves_state_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").expect("write");
        let mut store = PreferenceStore::with_defaults(blocker.join("prefs.toml"));

        let err = store.set_theme(Theme::Dark).expect_err("parent is a file");
        assert!(matches!(err, ConfigError::PreferencesIo { .. }));
        assert_eq!(store.get(), Preferences::default());

        store.increase_font().expect_err("parent is a file");
        assert_eq!(store.get().font_size, FontSize::default());
    }
}
