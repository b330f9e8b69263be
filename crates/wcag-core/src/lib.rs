//! # wcag-core
//!
//! Core types shared by every WCAG Consulta crate.
//!
//! - Criterion records, stored (custom) cards, and user profiles
//! - Conformance level, role, principle, and theme enums
//! - Wire envelopes of the card-store function endpoint
//! - Key layout of the remote key-value store
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod keys;
pub mod responses;

pub use entities::{CardPatch, Criterion, NewCard, Profile, StoredCard, UserProfile};
pub use enums::{Level, Principle, Role, Theme};
pub use errors::CoreError;
