use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{KvError, KvStore};

/// Process-local store for `wcag serve` without a hosted backend, and tests.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryKv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), KvError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), KvError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, KvError> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn prefix_scan_is_ordered_and_bounded() {
        let kv = MemoryKv::new();
        kv.set("wcag_card:2", json!(2)).await.expect("set");
        kv.set("wcag_card:1", json!(1)).await.expect("set");
        kv.set("user_profile:a", json!("a")).await.expect("set");
        kv.set("wcag_cards_table_created", json!("true")).await.expect("set");

        let cards = kv.get_by_prefix("wcag_card:").await.expect("scan");
        let keys: Vec<_> = cards.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["wcag_card:1", "wcag_card:2"]);
    }

    #[tokio::test]
    async fn delete_removes_only_the_key() {
        let kv = MemoryKv::new();
        kv.set("a", json!(1)).await.expect("set");
        kv.set("b", json!(2)).await.expect("set");
        kv.del("a").await.expect("del");
        kv.del("missing").await.expect("del");
        assert!(kv.get("a").await.expect("get").is_none());
        assert_eq!(kv.len().await, 1);
    }
}
