//! Shared HTTP response helpers.
//!
//! Maps the function endpoint's status codes and `{error, details}` bodies to
//! [`StoreError`] so the endpoint modules only build requests and decode
//! success bodies.

use serde::de::DeserializeOwned;
use wcag_core::responses::ErrorResponse;

use crate::error::StoreError;

/// Return the response unchanged on success, otherwise the matching error.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body, status.canonical_reason().unwrap_or("request failed"));
    tracing::debug!(status = status.as_u16(), %message, "card store request failed");

    Err(match status.as_u16() {
        400 => StoreError::Validation(message),
        401 => StoreError::Unauthorized(message),
        403 => StoreError::Forbidden(message),
        404 => StoreError::NotFound(message),
        409 => StoreError::Conflict(message),
        code => StoreError::Api {
            status: code,
            message,
        },
    })
}

/// Decode a success body, reporting shape mismatches as [`StoreError::Parse`].
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, StoreError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))
}

/// `error` (plus `details`) from a JSON error body, or the raw body.
fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error,
            details: Some(details),
        }) => format!("{error} ({details})"),
        Ok(ErrorResponse { error, .. }) => error,
        Err(_) if body.trim().is_empty() => fallback.to_string(),
        Err(_) => body.trim().to_string(),
    }
}
