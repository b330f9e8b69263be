//! Hosted key-value table reached through its REST interface.
//!
//! The table has a text `key` column and a JSON `value` column. Filters use
//! the `column=op.value` query syntax.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{KvError, KvStore};

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    key: String,
    value: Value,
}

pub struct PostgrestKv {
    http: reqwest::Client,
    table_url: String,
    service_key: String,
}

impl PostgrestKv {
    /// # Errors
    ///
    /// Returns [`KvError::Http`] if the HTTP client fails to build.
    pub fn new(project_url: &str, service_key: &str, table: &str) -> Result<Self, KvError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wcag-server/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            table_url: format!(
                "{}/rest/v1/{}",
                project_url.trim_end_matches('/'),
                urlencoding::encode(table)
            ),
            service_key: service_key.to_string(),
        })
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, KvError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        Err(KvError::Backend {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        })
    }

    async fn rows(&self, filter: &str) -> Result<Vec<Row>, KvError> {
        let url = format!("{}?select=key,value&order=key.asc&{filter}", self.table_url);
        let resp = Self::check(self.authorized(self.http.get(&url)).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl KvStore for PostgrestKv {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError> {
        let rows = self
            .rows(&format!("key=eq.{}", urlencoding::encode(key)))
            .await?;
        Ok(rows.into_iter().next().map(|row| row.value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), KvError> {
        let row = Row {
            key: key.to_string(),
            value,
        };
        let resp = self
            .authorized(self.http.post(&self.table_url))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[row])
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), KvError> {
        let url = format!("{}?key=eq.{}", self.table_url, urlencoding::encode(key));
        Self::check(self.authorized(self.http.delete(&url)).send().await?).await?;
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, KvError> {
        let pattern = format!("{prefix}*");
        let rows = self
            .rows(&format!("key=like.{}", urlencoding::encode(&pattern)))
            .await?;
        Ok(rows.into_iter().map(|row| (row.key, row.value)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_is_built_from_project() {
        let kv = PostgrestKv::new("https://abc.supabase.co/", "service", "kv_store_6cf82b18")
            .expect("client");
        assert_eq!(kv.table_url, "https://abc.supabase.co/rest/v1/kv_store_6cf82b18");
    }

    #[test]
    fn rows_parse_from_rest_response() {
        let rows: Vec<Row> = serde_json::from_str(
            r#"[{"key":"wcag_card:1","value":{"id":"1"}},{"key":"wcag_card:2","value":"{\"id\":\"2\"}"}]"#,
        )
        .expect("parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "wcag_card:1");
        assert!(rows[1].value.is_string());
    }
}
