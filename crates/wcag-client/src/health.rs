//! Liveness probe and one-time store initialization.

use wcag_core::responses::{HealthResponse, MessageResponse};

use crate::http::{check_response, decode};
use crate::{CardStoreClient, StoreError};

impl CardStoreClient {
    /// `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the endpoint is unreachable or unhealthy.
    pub async fn health(&self) -> Result<HealthResponse, StoreError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        decode(check_response(resp).await?).await
    }

    /// `POST /init`. Writes the initialization marker; safe to repeat.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the server reports an
    /// error.
    pub async fn init(&self) -> Result<MessageResponse, StoreError> {
        let resp = self
            .anon_bearer(self.http.post(self.url("/init")))
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }
}
