pub mod admin;
pub mod auth;
pub mod prefs;

pub use admin::AdminCommands;
pub use auth::AuthCommands;
pub use prefs::{FontChange, PrefsCommands};
