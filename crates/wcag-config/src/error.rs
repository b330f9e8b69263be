//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration section is not configured.
    #[error("Configuration section '{section}' is not configured (missing {missing})")]
    NotConfigured { section: String, missing: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Reading or writing the preferences file failed.
    #[error("Preferences file {}: {source}", path.display())]
    PreferencesIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences file is not valid TOML.
    #[error("Preferences file {} is malformed: {reason}", path.display())]
    PreferencesFormat { path: PathBuf, reason: String },
}

