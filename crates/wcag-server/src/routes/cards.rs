use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::HeaderMap,
};
use chrono::Utc;
use serde::Deserialize;
use wcag_core::responses::{CardResponse, CardsResponse, MessageResponse};
use wcag_core::{CardPatch, Level, StoredCard, keys};

use super::require_admin;
use crate::error::ApiError;
use crate::kv;
use crate::state::AppState;

/// Create body with every field optional, so missing ones produce the
/// endpoint's own 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CardBody {
    criterion_id: Option<String>,
    title: Option<String>,
    level: Option<String>,
    principle: Option<String>,
    category: Option<String>,
    description: Option<String>,
    keywords: Option<Vec<String>>,
    url: Option<String>,
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

pub async fn list_cards(State(state): State<AppState>) -> Result<Json<CardsResponse>, ApiError> {
    let entries = state
        .kv
        .get_by_prefix(keys::CARD_PREFIX)
        .await
        .map_err(ApiError::store("Failed to fetch cards"))?;

    let cards = entries
        .into_iter()
        .filter_map(|(key, value)| match kv::decode::<StoredCard>(&key, value) {
            Ok(card) => Some(card),
            Err(error) => {
                tracing::warn!(%error, "skipping malformed card");
                None
            }
        })
        .collect();
    Ok(Json(CardsResponse { cards }))
}

pub async fn create_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CardBody>, JsonRejection>,
) -> Result<Json<CardResponse>, ApiError> {
    let user = require_admin(&state, &headers).await?;
    let Json(body) = body?;

    let (
        Some(criterion_id),
        Some(title),
        Some(level),
        Some(principle),
        Some(category),
        Some(description),
    ) = (
        required(body.criterion_id),
        required(body.title),
        required(body.level),
        required(body.principle),
        required(body.category),
        required(body.description),
    )
    else {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    };
    let level: Level = level
        .parse()
        .map_err(|e: wcag_core::CoreError| ApiError::Validation(e.to_string()))?;

    let _claim = state.card_ids.lock().await;
    let id = next_card_id(&state).await?;
    let now = Utc::now();
    let card = StoredCard {
        id,
        criterion_id,
        title,
        level,
        principle,
        category,
        description,
        keywords: body.keywords.unwrap_or_default(),
        url: body.url.filter(|url| !url.trim().is_empty()),
        created_by: user.id,
        created_at: now,
        updated_at: now,
    };
    save_card(&state, &card, "Failed to create card").await?;
    tracing::info!(card_id = %card.id, criterion_id = %card.criterion_id, "card created");

    Ok(Json(CardResponse {
        message: "Card created successfully".to_string(),
        card,
    }))
}

pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<CardPatch>, JsonRejection>,
) -> Result<Json<CardResponse>, ApiError> {
    require_admin(&state, &headers).await?;
    let Json(patch) = body?;

    let mut card = load_card(&state, &id, "Failed to update card").await?;
    patch.apply_to(&mut card, Utc::now());
    save_card(&state, &card, "Failed to update card").await?;
    tracing::info!(card_id = %id, "card updated");

    Ok(Json(CardResponse {
        message: "Card updated successfully".to_string(),
        card,
    }))
}

pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&state, &headers).await?;

    let key = keys::card_key(&id);
    let exists = state
        .kv
        .get(&key)
        .await
        .map_err(ApiError::store("Failed to delete card"))?
        .is_some();
    if !exists {
        return Err(ApiError::CardNotFound);
    }
    state
        .kv
        .del(&key)
        .await
        .map_err(ApiError::store("Failed to delete card"))?;
    tracing::info!(card_id = %id, "card deleted");

    Ok(Json(MessageResponse::new("Card deleted successfully")))
}

/// Creation time in milliseconds, bumped past any id already taken.
async fn next_card_id(state: &AppState) -> Result<String, ApiError> {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let id = millis.to_string();
        let taken = state
            .kv
            .get(&keys::card_key(&id))
            .await
            .map_err(ApiError::store("Failed to create card"))?
            .is_some();
        if !taken {
            return Ok(id);
        }
        millis += 1;
    }
}

async fn load_card(state: &AppState, id: &str, action: &'static str) -> Result<StoredCard, ApiError> {
    let key = keys::card_key(id);
    let raw = state
        .kv
        .get(&key)
        .await
        .map_err(ApiError::store(action))?
        .ok_or(ApiError::CardNotFound)?;
    kv::decode(&key, raw).map_err(ApiError::store(action))
}

async fn save_card(state: &AppState, card: &StoredCard, action: &'static str) -> Result<(), ApiError> {
    let value = serde_json::to_value(card).map_err(|e| ApiError::internal(action, &e))?;
    state
        .kv
        .set(&keys::card_key(&card.id), value)
        .await
        .map_err(ApiError::store(action))
}
