//! Key-value persistence behind the function endpoint.
//!
//! Values are JSON documents. Keys follow [`wcag_core::keys`].

mod memory;
mod postgrest;

pub use memory::MemoryKv;
pub use postgrest::PostgrestKv;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("key-value transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("key-value store returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("stored value for '{key}' is malformed: {reason}")]
    Malformed { key: String, reason: String },
}

#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), KvError>;
    async fn del(&self, key: &str) -> Result<(), KvError>;
    /// Values of every key starting with `prefix`, in key order.
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, KvError>;
}

/// Decode a stored document. Values written as JSON-encoded strings are
/// unwrapped first.
pub fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, KvError> {
    let value = match value {
        Value::String(raw) => serde_json::from_str(&raw).map_err(|e| KvError::Malformed {
            key: key.to_string(),
            reason: e.to_string(),
        })?,
        other => other,
    };
    serde_json::from_value(value).map_err(|e| KvError::Malformed {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
