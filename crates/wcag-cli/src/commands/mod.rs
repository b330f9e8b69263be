pub mod admin;
pub mod auth;
pub mod catalog;
pub mod dispatch;
pub mod health;
pub mod list;
pub mod prefs;
pub mod serve;
pub mod show;
