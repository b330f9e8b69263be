//! HTTP error responses of the function endpoint.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use wcag_core::responses::ErrorResponse;

use crate::identity::IdentityError;
use crate::kv::KvError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    /// Malformed JSON body.
    #[error("Invalid request body")]
    MalformedBody(String),

    #[error("Authorization token required")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User profile not found")]
    ProfileNotFound,

    #[error("Admin access required")]
    AdminRequired,

    #[error("Card not found")]
    CardNotFound,

    #[error("Email already registered")]
    DuplicateEmail,

    /// The identity provider refused to create the account.
    #[error("Failed to create user")]
    SignupRejected(String),

    /// Store or provider failure while performing `action`.
    #[error("{action}")]
    Internal { action: &'static str, details: String },
}

impl ApiError {
    pub fn internal(action: &'static str, source: &impl std::fmt::Display) -> Self {
        Self::Internal {
            action,
            details: source.to_string(),
        }
    }

    /// Wrap a key-value failure; `action` is the user-facing summary.
    pub fn store(action: &'static str) -> impl FnOnce(KvError) -> Self {
        move |error| Self::internal(action, &error)
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) | Self::SignupRejected(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::AdminRequired => StatusCode::FORBIDDEN,
            Self::ProfileNotFound | Self::CardNotFound => StatusCode::NOT_FOUND,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::MalformedBody(details)
            | Self::SignupRejected(details)
            | Self::Internal { details, .. } => Some(details.clone()),
            _ => None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<IdentityError> for ApiError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::InvalidToken => Self::InvalidToken,
            IdentityError::DuplicateEmail => Self::DuplicateEmail,
            IdentityError::Rejected(message) => Self::SignupRejected(message),
            IdentityError::Http(e) => Self::internal("Identity provider unavailable", &e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, details = ?self.details(), "request failed");
        }
        let body = ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        };
        (status, Json(body)).into_response()
    }
}
