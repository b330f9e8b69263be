//! # wcag-auth
//!
//! Sign-in for WCAG Consulta: a [`SessionManager`] driving an
//! [`AuthProvider`] (the hosted GoTrue API in production), with sessions
//! persisted through a [`SessionStore`] (OS keychain, falling back to a
//! `0600` file).
//!
//! The card store only ever sees the access token; role and display name
//! come from its `/profile` endpoint.

pub mod claims;
pub mod error;
pub mod manager;
pub mod provider;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use manager::SessionManager;
pub use provider::{AuthProvider, HostedAuth};
pub use session::{Session, SessionIdentity, SessionState, SessionUser};
pub use store::{FileSessionStore, KeyringSessionStore, MemorySessionStore, SessionStore};
