//! # wcag-search
//!
//! Client-side search over the criterion list:
//! - merging the static catalog with remote custom cards
//! - ordering by dotted numeric id
//! - case-insensitive substring filtering
//! - discarding out-of-order remote refreshes

pub mod filter;
pub mod index;
pub mod merge;
pub mod order;
pub mod remote;

pub use filter::filter;
pub use index::{CatalogCounts, CriteriaIndex};
pub use merge::merge;
pub use order::{compare_ids, sort_by_id};
pub use remote::{RefreshTicket, RemoteCards};
