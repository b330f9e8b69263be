//! Request handlers and the bearer-token guards they share.

mod accounts;
mod cards;
pub mod local_auth;
mod system;

pub use accounts::{profile, signup};
pub use cards::{create_card, delete_card, list_cards, update_card};
pub use system::{health, init};

use axum::http::{HeaderMap, header::AUTHORIZATION};
use wcag_core::{Profile, Role, keys};

use crate::error::ApiError;
use crate::identity::IdentityUser;
use crate::kv;
use crate::state::AppState;

/// Second word of the `Authorization` header, as in `Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)
}

/// Resolve the caller from the bearer token.
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<IdentityUser, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError::MissingToken)?;
    Ok(state.identity.get_user(token).await?)
}

/// Resolve the caller and require a stored profile with the admin role.
async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<IdentityUser, ApiError> {
    let user = authenticate(state, headers).await?;
    let key = keys::profile_key(&user.id);
    let raw = state
        .kv
        .get(&key)
        .await
        .map_err(ApiError::store("Failed to verify permissions"))?
        .ok_or(ApiError::ProfileNotFound)?;
    let profile: Profile =
        kv::decode(&key, raw).map_err(ApiError::store("Failed to verify permissions"))?;
    if profile.role != Role::Admin {
        tracing::debug!(user_id = %user.id, "non-admin attempted a card mutation");
        return Err(ApiError::AdminRequired);
    }
    Ok(user)
}
