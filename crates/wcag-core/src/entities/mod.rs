mod card;
mod criterion;
mod profile;

pub use card::{CardPatch, NewCard, StoredCard};
pub use criterion::Criterion;
pub use profile::{Profile, UserProfile};
