use std::sync::Arc;

use tokio::sync::Mutex;

use crate::identity::{IdentityProvider, MemoryIdentity};
use crate::kv::{KvStore, MemoryKv};

/// Shared handles of every request handler.
#[derive(Clone)]
pub struct AppState {
    pub kv: Arc<dyn KvStore>,
    pub identity: Arc<dyn IdentityProvider>,
    /// Serializes card-id allocation with the write that claims it.
    pub card_ids: Arc<Mutex<()>>,
    /// Set when accounts live in memory; the router then serves token grants.
    pub local_auth: Option<Arc<MemoryIdentity>>,
}

impl AppState {
    pub fn new(kv: Arc<dyn KvStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            kv,
            identity,
            card_ids: Arc::new(Mutex::new(())),
            local_auth: None,
        }
    }

    /// Accounts live in `identity`; also serve `/auth/v1` token grants.
    #[must_use]
    pub fn with_local_auth(kv: Arc<dyn KvStore>, identity: Arc<MemoryIdentity>) -> Self {
        Self {
            local_auth: Some(Arc::clone(&identity)),
            ..Self::new(kv, identity)
        }
    }

    /// Fully in-memory state. The concrete handles are returned as well so
    /// callers can seed accounts and inspect the store.
    #[must_use]
    pub fn in_memory() -> (Self, Arc<MemoryKv>, Arc<MemoryIdentity>) {
        let kv = Arc::new(MemoryKv::new());
        let identity = Arc::new(MemoryIdentity::new());
        (Self::with_local_auth(kv.clone(), identity.clone()), kv, identity)
    }
}
