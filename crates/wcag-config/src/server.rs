//! `wcag serve` settings.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    "127.0.0.1:8787".to_string()
}

fn default_route_prefix() -> String {
    "/make-server-6cf82b18".to_string()
}

fn default_kv_table() -> String {
    "kv_store_6cf82b18".to_string()
}

/// Where the server keeps profiles and cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KvBackend {
    /// Process memory; lost on exit.
    #[default]
    Memory,
    /// Hosted key-value table over its REST interface.
    Hosted,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Path every route is nested under. Empty or `/` mounts at the root.
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,

    /// Hosted project URL used for the admin auth API and the REST table.
    #[serde(default)]
    pub supabase_url: String,

    #[serde(default)]
    pub service_role_key: String,

    #[serde(default = "default_kv_table")]
    pub kv_table: String,

    #[serde(default)]
    pub kv_backend: KvBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            route_prefix: default_route_prefix(),
            supabase_url: String::new(),
            service_role_key: String::new(),
            kv_table: default_kv_table(),
            kv_backend: KvBackend::default(),
        }
    }
}

impl ServerConfig {
    /// Whether the hosted auth admin API and REST table can be reached.
    #[must_use]
    pub fn is_hosted_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.service_role_key.is_empty()
    }
}
