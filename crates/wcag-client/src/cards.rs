//! Custom criterion card CRUD.

use wcag_core::responses::{CardResponse, CardsResponse, MessageResponse};
use wcag_core::{CardPatch, NewCard, StoredCard};

use crate::http::{check_response, decode};
use crate::{CardStoreClient, StoreError, require_token};

impl CardStoreClient {
    /// `GET /wcag-cards`. No token needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the body is malformed.
    pub async fn list_cards(&self) -> Result<Vec<StoredCard>, StoreError> {
        let resp = self.http.get(self.url("/wcag-cards")).send().await?;
        let data: CardsResponse = decode(check_response(resp).await?).await?;
        tracing::debug!(count = data.cards.len(), "fetched custom cards");
        Ok(data.cards)
    }

    /// `POST /wcag-cards` with an admin token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] for a blank token and
    /// [`StoreError::Validation`] for missing fields, both without sending a
    /// request. Server rejections map through the usual status table.
    pub async fn create_card(&self, card: &NewCard, token: &str) -> Result<StoredCard, StoreError> {
        let token = require_token(token)?;
        let missing = card.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
        let resp = self
            .http
            .post(self.url("/wcag-cards"))
            .bearer_auth(token)
            .json(card)
            .send()
            .await?;
        let data: CardResponse = decode(check_response(resp).await?).await?;
        Ok(data.card)
    }

    /// `PUT /wcag-cards/:id`, merging the present fields of `patch`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] for a blank token and
    /// [`StoreError::Validation`] for an empty patch, without sending a
    /// request.
    pub async fn update_card(
        &self,
        id: &str,
        patch: &CardPatch,
        token: &str,
    ) -> Result<StoredCard, StoreError> {
        let token = require_token(token)?;
        if patch.is_empty() {
            return Err(StoreError::Validation("nothing to update".to_string()));
        }
        let resp = self
            .http
            .put(self.card_url(id))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        let data: CardResponse = decode(check_response(resp).await?).await?;
        Ok(data.card)
    }

    /// `DELETE /wcag-cards/:id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] for a blank token and
    /// [`StoreError::NotFound`] for an unknown id.
    pub async fn delete_card(&self, id: &str, token: &str) -> Result<MessageResponse, StoreError> {
        let token = require_token(token)?;
        let resp = self
            .http
            .delete(self.card_url(id))
            .bearer_auth(token)
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }

    fn card_url(&self, id: &str) -> String {
        self.url(&format!("/wcag-cards/{}", urlencoding::encode(id.trim())))
    }
}
