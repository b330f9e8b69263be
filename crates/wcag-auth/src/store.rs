//! Persisted sessions.
//!
//! The CLI keeps one session per OS user: in the OS keychain when one is
//! available, otherwise in a `0600` JSON file under the config directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;
use crate::session::Session;

const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session.json";

/// Somewhere a [`Session`] survives between runs.
pub trait SessionStore: Send + Sync {
    /// The stored session, if any. Unreadable or malformed data is `None`.
    fn load(&self) -> Option<Session>;

    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the session cannot be written.
    fn save(&self, session: &Session) -> Result<(), AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if stored data cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;
}

/// Default location of the session file: `<config_dir>/wcag/session.json`.
#[must_use]
pub fn default_session_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wcag").join(SESSION_FILE_NAME))
}

/// OS keychain with a file fallback.
pub struct KeyringSessionStore {
    service: String,
    fallback: FileSessionStore,
}

impl KeyringSessionStore {
    #[must_use]
    pub fn new(service: impl Into<String>, fallback: FileSessionStore) -> Self {
        Self {
            service: service.into(),
            fallback,
        }
    }

    fn entry(&self) -> Option<keyring::Entry> {
        keyring::Entry::new(&self.service, KEYRING_USER).ok()
    }

    /// Which tier currently holds a session, for status display.
    #[must_use]
    pub fn source(&self) -> Option<&'static str> {
        if let Some(entry) = self.entry()
            && entry.get_password().is_ok_and(|raw| !raw.trim().is_empty())
        {
            return Some("keyring");
        }
        self.fallback.load().map(|_| "file")
    }
}

impl SessionStore for KeyringSessionStore {
    fn load(&self) -> Option<Session> {
        if let Some(entry) = self.entry()
            && let Ok(raw) = entry.get_password()
        {
            match serde_json::from_str(&raw) {
                Ok(session) => return Some(session),
                Err(error) => tracing::warn!(%error, "ignoring malformed keyring session"),
            }
        }
        self.fallback.load()
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let raw = serde_json::to_string(session)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
        match keyring::Entry::new(&self.service, KEYRING_USER) {
            Ok(entry) => match entry.set_password(&raw) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.fallback.save(session)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.fallback.save(session)
            }
        }
    }

    fn clear(&self) -> Result<(), AuthError> {
        // A missing keyring entry is not an error.
        if let Some(entry) = self.entry() {
            let _ = entry.delete_credential();
        }
        self.fallback.clear()
    }
}

/// JSON file readable only by the owner.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when no config directory exists.
    pub fn at_default_path() -> Result<Self, AuthError> {
        default_session_path().map(Self::new).ok_or_else(|| {
            AuthError::SessionStore("config directory not found: cannot store session".into())
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        serde_json::from_str(&raw)
            .inspect_err(|error| {
                tracing::warn!(%error, path = %self.path.display(), "ignoring malformed session file");
            })
            .ok()
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let path = &self.path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::SessionStore(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
        fs::write(path, raw)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::SessionStore(format!("chmod {}: {e}", path.display())))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::SessionStore(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

/// Process-local store for tests and one-shot commands.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.session
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot().clone()
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        *self.slot() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.slot() = None;
        Ok(())
    }
}
