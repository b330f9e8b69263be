//! Unverified access-token payload.
//!
//! Only used to fill in fields the provider left out of a token response;
//! the signature is never checked here.

use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: i64,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedToken`] if the token is not three
    /// base64url segments or the payload lacks `sub`/`exp`.
    pub fn decode(jwt: &str) -> Result<Self, AuthError> {
        let mut parts = jwt.split('.');
        let (Some(_), Some(payload), Some(_), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::MalformedToken("invalid JWT format".into()));
        };
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AuthError::MalformedToken(format!("base64 decode failed: {e}")))?;
        serde_json::from_slice(&payload)
            .map_err(|e| AuthError::MalformedToken(format!("payload: {e}")))
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
pub(crate) fn make_jwt(sub: &str, exp: i64) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(r#"{"alg":"HS256"}"#);
    let payload = engine.encode(format!(r#"{{"sub":"{sub}","email":"a@b.c","exp":{exp}}}"#));
    let signature = engine.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}
