//! Profile lookup and account creation.

use wcag_core::Profile;
use wcag_core::responses::{ProfileResponse, SignupRequest, SignupResponse};

use crate::http::{check_response, decode};
use crate::{CardStoreClient, StoreError, require_token};

impl CardStoreClient {
    /// `GET /profile` for the user owning `token`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] for a blank or rejected token.
    pub async fn fetch_profile(&self, token: &str) -> Result<Profile, StoreError> {
        let token = require_token(token)?;
        let resp = self
            .http
            .get(self.url("/profile"))
            .bearer_auth(token)
            .send()
            .await?;
        let data: ProfileResponse = decode(check_response(resp).await?).await?;
        Ok(data.profile)
    }

    /// `POST /signup`. Creates a confirmed account; does not sign in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when e-mail or password is blank
    /// and [`StoreError::Conflict`] when the e-mail is already registered.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<SignupResponse, StoreError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(StoreError::Validation(
                "email and password are required".to_string(),
            ));
        }
        let resp = self
            .anon_bearer(self.http.post(self.url("/signup")))
            .json(request)
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }
}
