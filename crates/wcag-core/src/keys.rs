//! Key layout of the remote key-value store.

pub const PROFILE_PREFIX: &str = "user_profile:";
pub const CARD_PREFIX: &str = "wcag_card:";

/// Written by `/init`; its value is the string `"true"`.
pub const INIT_MARKER_KEY: &str = "wcag_cards_table_created";

#[must_use]
pub fn profile_key(user_id: &str) -> String {
    format!("{PROFILE_PREFIX}{user_id}")
}

#[must_use]
pub fn card_key(card_id: &str) -> String {
    format!("{CARD_PREFIX}{card_id}")
}
