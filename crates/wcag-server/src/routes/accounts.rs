use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use chrono::Utc;
use wcag_core::responses::{ProfileResponse, SignupRequest, SignupResponse};
use wcag_core::{Profile, Role, keys};

use super::authenticate;
use crate::error::ApiError;
use crate::identity::{IdentityUser, NewAccount};
use crate::kv;
use crate::state::AppState;

/// Create a confirmed account and store its profile.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<SignupResponse>, ApiError> {
    let Json(request) = body?;
    let email = request.email.trim().to_string();
    if email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    let role = request.role.unwrap_or_default();

    let user = state
        .identity
        .create_user(NewAccount {
            email: email.clone(),
            password: request.password,
            name: request.name.clone(),
            role,
        })
        .await?;

    let profile = Profile {
        id: user.id,
        email,
        name: request.name,
        role,
        created_at: Some(Utc::now()),
    };
    store_profile(&state, &profile).await?;
    tracing::info!(user_id = %profile.id, role = %profile.role, "user created");

    Ok(Json(SignupResponse {
        message: "User created successfully".to_string(),
        user: profile,
    }))
}

/// Profile of the caller, rebuilt from account metadata when none is stored.
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = authenticate(&state, &headers).await?;
    let key = keys::profile_key(&user.id);
    let stored = state
        .kv
        .get(&key)
        .await
        .map_err(ApiError::store("Failed to fetch profile"))?;

    let profile = match stored {
        Some(raw) => kv::decode(&key, raw).map_err(ApiError::store("Failed to fetch profile"))?,
        None => {
            let profile = profile_from_metadata(user);
            store_profile(&state, &profile).await?;
            profile
        }
    };
    Ok(Json(ProfileResponse { profile }))
}

fn profile_from_metadata(user: IdentityUser) -> Profile {
    let role = user
        .user_metadata
        .role
        .as_deref()
        .and_then(Role::parse_lenient)
        .unwrap_or_default();
    Profile {
        id: user.id,
        email: user.email,
        name: user.user_metadata.name.unwrap_or_default(),
        role,
        created_at: user.created_at,
    }
}

async fn store_profile(state: &AppState, profile: &Profile) -> Result<(), ApiError> {
    let value = serde_json::to_value(profile)
        .map_err(|e| ApiError::internal("Failed to store profile", &e))?;
    state
        .kv
        .set(&keys::profile_key(&profile.id), value)
        .await
        .map_err(ApiError::store("Failed to store profile"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::UserMetadata;

    #[test]
    fn metadata_fallback_defaults_name_and_role() {
        let profile = profile_from_metadata(IdentityUser {
            id: "u1".into(),
            email: "a@b.c".into(),
            user_metadata: UserMetadata {
                name: None,
                role: Some("owner".into()),
            },
            created_at: None,
        });
        assert_eq!(profile.name, "");
        assert_eq!(profile.role, Role::User);
        assert_eq!(profile.email, "a@b.c");
    }
}
