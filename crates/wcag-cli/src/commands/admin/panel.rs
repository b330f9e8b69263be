//! Admin panel: card draft form plus the create/update/delete flow.
//!
//! Only administrators get a panel. At most one mutation is in flight at a
//! time; the list is re-fetched after every successful mutation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use wcag_auth::SessionUser;
use wcag_client::{CardStoreClient, StoreError};
use wcag_core::{CardPatch, Level, NewCard, StoredCard};
use wcag_search::RemoteCards;

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("sign in with `wcag auth login` to use the admin panel")]
    NotSignedIn,

    #[error("restricted access: the admin panel is only available to administrators")]
    Restricted,

    #[error("another request is still in progress")]
    Busy,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PanelError {
    /// The card store rejected the session token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Store(error) if error.is_unauthorized())
    }
}

/// Form state for a new card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub criterion_id: String,
    pub title: String,
    pub level: Level,
    pub principle: String,
    pub category: String,
    pub description: String,
    keywords: Vec<String>,
    pub url: String,
}

impl Default for CardDraft {
    fn default() -> Self {
        Self {
            criterion_id: String::new(),
            title: String::new(),
            level: Level::A,
            principle: String::new(),
            category: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            url: String::new(),
        }
    }
}

impl CardDraft {
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Add a trimmed keyword. Blank and duplicate keywords are ignored.
    pub fn add_keyword(&mut self, raw: &str) -> bool {
        let keyword = raw.trim();
        if keyword.is_empty() || self.keywords.iter().any(|k| k == keyword) {
            return false;
        }
        self.keywords.push(keyword.to_string());
        true
    }

    pub fn remove_keyword(&mut self, keyword: &str) -> bool {
        let before = self.keywords.len();
        self.keywords.retain(|k| k != keyword);
        self.keywords.len() != before
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn to_new_card(&self) -> NewCard {
        let url = self.url.trim();
        NewCard {
            criterion_id: self.criterion_id.trim().to_string(),
            title: self.title.trim().to_string(),
            level: self.level,
            principle: self.principle.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            keywords: self.keywords.clone(),
            url: (!url.is_empty()).then(|| url.to_string()),
        }
    }
}

/// Releases the busy flag when dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, PanelError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PanelError::Busy)?;
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct AdminPanel {
    client: Arc<CardStoreClient>,
    token: String,
    cards: Mutex<RemoteCards>,
    busy: AtomicBool,
}

impl AdminPanel {
    /// Open the panel for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotSignedIn`] without a user and
    /// [`PanelError::Restricted`] unless the profile role is admin.
    pub fn open(
        client: Arc<CardStoreClient>,
        user: Option<&SessionUser>,
        token: String,
    ) -> Result<Self, PanelError> {
        let user = user.ok_or(PanelError::NotSignedIn)?;
        if !user.is_admin() {
            tracing::info!(user = %user.id, "admin panel refused for non-admin");
            return Err(PanelError::Restricted);
        }
        Ok(Self {
            client,
            token,
            cards: Mutex::new(RemoteCards::new()),
            busy: AtomicBool::new(false),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn is_loading(&self) -> bool {
        self.lock_cards().is_loading()
    }

    /// Cards from the latest applied list response.
    pub fn cards(&self) -> Vec<StoredCard> {
        self.lock_cards().cards().to_vec()
    }

    /// Re-fetch the card list. Returns whether the response was applied.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Store`] when the list request fails; the
    /// previous list is kept.
    pub async fn refresh(&self) -> Result<bool, PanelError> {
        let ticket = self.lock_cards().begin();
        match self.client.list_cards().await {
            Ok(cards) => Ok(self.lock_cards().complete(ticket, cards)),
            Err(error) => {
                self.lock_cards().fail(ticket);
                Err(error.into())
            }
        }
    }

    /// Create a card from `draft`. The draft is cleared only on success.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Busy`] while another mutation is in flight and
    /// [`PanelError::Store`] when the card is invalid or rejected.
    pub async fn submit(&self, draft: &mut CardDraft) -> Result<StoredCard, PanelError> {
        let card = {
            let _busy = BusyGuard::acquire(&self.busy)?;
            self.client
                .create_card(&draft.to_new_card(), &self.token)
                .await?
        };
        tracing::info!(id = %card.id, criterion = %card.criterion_id, "card created");
        draft.clear();
        self.refresh_after_mutation().await;
        Ok(card)
    }

    /// # Errors
    ///
    /// Returns [`PanelError::Busy`] while another mutation is in flight and
    /// [`PanelError::Store`] for an empty patch or an unknown id.
    pub async fn update(&self, id: &str, patch: &CardPatch) -> Result<StoredCard, PanelError> {
        let card = {
            let _busy = BusyGuard::acquire(&self.busy)?;
            self.client.update_card(id, patch, &self.token).await?
        };
        tracing::info!(id = %card.id, "card updated");
        self.refresh_after_mutation().await;
        Ok(card)
    }

    /// Delete `id` once `confirm` agrees. Returns `false` when declined.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Busy`] while another mutation is in flight and
    /// [`PanelError::Store`] for an unknown id.
    pub async fn delete(
        &self,
        id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool, PanelError> {
        if !confirm(id) {
            tracing::debug!(id, "deletion declined");
            return Ok(false);
        }
        {
            let _busy = BusyGuard::acquire(&self.busy)?;
            self.client.delete_card(id, &self.token).await?;
        }
        tracing::info!(id, "card deleted");
        self.refresh_after_mutation().await;
        Ok(true)
    }

    async fn refresh_after_mutation(&self) {
        if let Err(error) = self.refresh().await {
            tracing::warn!(%error, "card list refresh failed after a successful change");
        }
    }

    fn lock_cards(&self) -> MutexGuard<'_, RemoteCards> {
        self.cards.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::{TimeDelta, Utc};
    use pretty_assertions::assert_eq;
    use tokio::net::TcpListener;
    use wcag_auth::{Session, SessionIdentity};
    use wcag_core::responses::SignupRequest;
    use wcag_core::{Role, UserProfile};
    use wcag_server::identity::MemoryIdentity;
    use wcag_server::{AppState, router};

    use super::*;

    const PREFIX: &str = "/make-server-6cf82b18";

    async fn start() -> (Arc<CardStoreClient>, Arc<MemoryIdentity>) {
        let (state, _kv, identity) = AppState::in_memory();
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            wcag_server::serve(listener, router(state, PREFIX))
                .await
                .expect("serve");
        });
        let client = CardStoreClient::new(
            format!("http://{addr}{PREFIX}"),
            "anon-key",
            Duration::from_secs(5),
        )
        .expect("client");
        (Arc::new(client), identity)
    }

    async fn user(
        client: &CardStoreClient,
        identity: &MemoryIdentity,
        email: &str,
        role: Role,
    ) -> SessionUser {
        client
            .sign_up(&SignupRequest {
                email: email.into(),
                password: "secret-pw".into(),
                name: "Tester".into(),
                role: Some(role),
            })
            .await
            .expect("sign up");
        let (token, account) = identity.sign_in(email, "secret-pw").await.expect("sign in");
        SessionUser {
            id: account.id.clone(),
            email: email.into(),
            profile: UserProfile {
                name: Some("Tester".into()),
                role: Some(role),
            },
            session: Session {
                access_token: token,
                refresh_token: String::new(),
                expires_at: Utc::now() + TimeDelta::hours(1),
                user: SessionIdentity {
                    id: account.id,
                    email: email.into(),
                },
            },
        }
    }

    async fn admin_panel() -> AdminPanel {
        let (client, identity) = start().await;
        let admin = user(&client, &identity, "admin@example.com", Role::Admin).await;
        let token = admin.session.access_token.clone();
        AdminPanel::open(client, Some(&admin), token).expect("admin panel")
    }

    fn draft(criterion_id: &str) -> CardDraft {
        let mut draft = CardDraft {
            criterion_id: criterion_id.into(),
            title: format!("{criterion_id} Custom [AA]"),
            level: Level::Aa,
            principle: "Robust".into(),
            category: "Compatible".into(),
            description: "A custom criterion.".into(),
            ..CardDraft::default()
        };
        draft.add_keyword("custom");
        draft
    }

    #[test]
    fn keywords_are_trimmed_and_deduplicated() {
        let mut draft = CardDraft::default();
        assert!(draft.add_keyword("  focus "));
        assert!(!draft.add_keyword("focus"));
        assert!(!draft.add_keyword("   "));
        assert!(draft.add_keyword("contrast"));
        assert_eq!(draft.keywords(), ["focus", "contrast"]);

        assert!(draft.remove_keyword("focus"));
        assert!(!draft.remove_keyword("focus"));
        assert_eq!(draft.keywords(), ["contrast"]);
    }

    #[test]
    fn draft_defaults_to_level_a_and_drops_blank_url() {
        let card = CardDraft::default().to_new_card();
        assert_eq!(card.level, Level::A);
        assert!(card.url.is_none());
        assert_eq!(card.missing_fields().len(), 5);
    }

    #[tokio::test]
    async fn non_admin_gets_restricted_access() {
        let (client, identity) = start().await;
        let member = user(&client, &identity, "member@example.com", Role::User).await;
        let token = member.session.access_token.clone();

        let result = AdminPanel::open(Arc::clone(&client), Some(&member), token);
        assert!(matches!(result, Err(PanelError::Restricted)));
        assert!(matches!(
            AdminPanel::open(client, None, String::new()),
            Err(PanelError::NotSignedIn)
        ));
    }

    #[tokio::test]
    async fn submit_clears_draft_and_refreshes_list() {
        let panel = admin_panel().await;
        let mut form = draft("9.9.9");

        let card = panel.submit(&mut form).await.expect("submit");

        assert_eq!(card.criterion_id, "9.9.9");
        assert_eq!(form, CardDraft::default());
        let cards = panel.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, card.id);
        assert!(!panel.is_busy());
        assert!(!panel.is_loading());
    }

    #[tokio::test]
    async fn failed_submit_keeps_draft() {
        let panel = admin_panel().await;
        let mut form = CardDraft {
            title: String::new(),
            ..draft("9.9.9")
        };
        let before = form.clone();

        let err = panel.submit(&mut form).await.expect_err("missing title");

        assert!(matches!(err, PanelError::Store(StoreError::Validation(_))));
        assert_eq!(form, before);
        panel.refresh().await.expect("refresh");
        assert!(panel.cards().is_empty());
    }

    #[tokio::test]
    async fn second_submission_is_rejected_while_busy() {
        let panel = admin_panel().await;
        let mut first = draft("9.9.8");
        let mut second = draft("9.9.9");

        let (a, b) = tokio::join!(panel.submit(&mut first), panel.submit(&mut second));

        assert!(a.is_ok());
        assert!(matches!(b, Err(PanelError::Busy)));
        assert_eq!(second, draft("9.9.9"));
        assert_eq!(panel.cards().len(), 1);
    }

    #[tokio::test]
    async fn delete_requires_confirmation() {
        let panel = admin_panel().await;
        let card = panel.submit(&mut draft("9.9.9")).await.expect("submit");

        let declined = panel.delete(&card.id, |_| false).await.expect("declined");
        assert!(!declined);
        assert_eq!(panel.cards().len(), 1);

        let deleted = panel
            .delete(&card.id, |id| id == card.id)
            .await
            .expect("delete");
        assert!(deleted);
        assert!(panel.cards().is_empty());
    }

    #[tokio::test]
    async fn update_and_unknown_delete() {
        let panel = admin_panel().await;
        let card = panel.submit(&mut draft("9.9.9")).await.expect("submit");

        let updated = panel
            .update(
                &card.id,
                &CardPatch {
                    title: Some("Renamed".into()),
                    ..CardPatch::default()
                },
            )
            .await
            .expect("update");
        assert_eq!(updated.title, "Renamed");
        assert_eq!(panel.cards()[0].title, "Renamed");

        let err = panel.delete("missing", |_| true).await.expect_err("unknown");
        assert!(matches!(err, PanelError::Store(StoreError::NotFound(_))));
        assert_eq!(panel.cards().len(), 1);
    }
}
