//! Sign-in state machine.
//!
//! ```text
//! Restoring ──restore──▶ Authenticated ◀──sign_in── Unauthenticated
//!     │                      │  ▲                        ▲
//!     └──────────────────────┼──┘ refresh ok             │
//!                            └──sign_out / refresh fails─┘
//! ```

use std::sync::Arc;

use wcag_client::CardStoreClient;
use wcag_core::responses::SignupRequest;
use wcag_core::{Profile, Role, UserProfile};

use crate::error::AuthError;
use crate::provider::AuthProvider;
use crate::session::{Session, SessionState, SessionUser};
use crate::store::SessionStore;

pub struct SessionManager<P, S> {
    provider: P,
    store: S,
    client: Arc<CardStoreClient>,
    expiry_buffer_secs: i64,
    state: SessionState,
}

impl<P: AuthProvider, S: SessionStore> SessionManager<P, S> {
    /// Starts in [`SessionState::Restoring`]; call [`Self::restore`] next.
    pub const fn new(
        provider: P,
        store: S,
        client: Arc<CardStoreClient>,
        expiry_buffer_secs: i64,
    ) -> Self {
        Self {
            provider,
            store,
            client,
            expiry_buffer_secs,
            state: SessionState::Restoring,
        }
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Restoring)
    }

    pub const fn user(&self) -> Option<&SessionUser> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(SessionUser::is_admin)
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The card-store client profile lookups and sign-ups go through.
    pub const fn client(&self) -> &Arc<CardStoreClient> {
        &self.client
    }

    /// Load the persisted session, refreshing it if it is about to expire.
    ///
    /// Always leaves the manager out of `Restoring`. A session that cannot
    /// be refreshed is discarded rather than reported as an error.
    pub async fn restore(&mut self) -> &SessionState {
        self.state = SessionState::Restoring;
        let Some(mut session) = self.store.load() else {
            tracing::debug!("no persisted session");
            self.state = SessionState::Unauthenticated;
            return &self.state;
        };

        if session.is_near_expiry(self.expiry_buffer_secs) {
            match self.provider.refresh(&session.refresh_token).await {
                Ok(renewed) => {
                    self.persist(&renewed);
                    session = renewed;
                }
                Err(error) => {
                    tracing::info!(%error, "persisted session could not be refreshed");
                    self.invalidate();
                    return &self.state;
                }
            }
        }

        self.enter(session).await;
        &self.state
    }

    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for a rejected e-mail or
    /// password; the state is left unchanged on any error.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<&SessionUser, AuthError> {
        let session = self
            .provider
            .sign_in_with_password(email, password)
            .await?;
        self.persist(&session);
        self.enter(session).await;
        self.user().ok_or(AuthError::NotAuthenticated)
    }

    /// Create an account through the card store. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::DuplicateEmail`] for an e-mail that is already
    /// registered, and [`AuthError::Store`] for any other rejection.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<Profile, AuthError> {
        let response = self
            .client
            .sign_up(&SignupRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
                name: name.trim().to_string(),
                role: Some(role),
            })
            .await?;
        tracing::info!(user = %response.user.id, "account created");
        Ok(response.user)
    }

    /// Revoke the session remotely if possible and forget it locally.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when local session data cannot be
    /// removed. A failed remote revoke is only logged.
    pub async fn sign_out(&mut self) -> Result<(), AuthError> {
        let session = match &self.state {
            SessionState::Authenticated(user) => Some(user.session.clone()),
            _ => self.store.load(),
        };
        if let Some(session) = session
            && let Err(error) = self.provider.sign_out(&session.access_token).await
        {
            tracing::warn!(%error, "remote sign-out failed; clearing local session anyway");
        }
        self.state = SessionState::Unauthenticated;
        self.store.clear()
    }

    /// A usable access token, refreshed first when close to expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when nobody is signed in and
    /// [`AuthError::SessionExpired`] when the refresh is rejected, after
    /// which the manager is `Unauthenticated`.
    pub async fn access_token(&mut self) -> Result<String, AuthError> {
        let session = match &self.state {
            SessionState::Authenticated(user) => user.session.clone(),
            _ => return Err(AuthError::NotAuthenticated),
        };
        if !session.is_near_expiry(self.expiry_buffer_secs) {
            return Ok(session.access_token);
        }

        match self.provider.refresh(&session.refresh_token).await {
            Ok(renewed) => {
                self.persist(&renewed);
                let token = renewed.access_token.clone();
                if let SessionState::Authenticated(user) = &mut self.state {
                    user.session = renewed;
                }
                Ok(token)
            }
            Err(error) => {
                tracing::info!(%error, "session refresh failed");
                self.invalidate();
                Err(AuthError::SessionExpired)
            }
        }
    }

    /// Drop the session after the card store rejected its token.
    pub fn invalidate(&mut self) {
        self.state = SessionState::Unauthenticated;
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to clear persisted session");
        }
    }

    /// Re-read the profile of the signed-in user.
    pub async fn reload_profile(&mut self) {
        let Some(token) = self.user().map(|user| user.session.access_token.clone()) else {
            return;
        };
        let profile = self.fetch_profile(&token).await;
        if let SessionState::Authenticated(user) = &mut self.state {
            user.profile = profile;
        }
    }

    async fn enter(&mut self, session: Session) {
        let profile = self.fetch_profile(&session.access_token).await;
        self.state = SessionState::Authenticated(SessionUser {
            id: session.user.id.clone(),
            email: session.user.email.clone(),
            profile,
            session,
        });
    }

    /// Profile for `token`; empty when the lookup fails.
    async fn fetch_profile(&self, token: &str) -> UserProfile {
        match self.client.fetch_profile(token).await {
            Ok(profile) => UserProfile::from(profile),
            Err(error) => {
                tracing::warn!(%error, "profile lookup failed; continuing without a role");
                UserProfile::default()
            }
        }
    }

    fn persist(&self, session: &Session) {
        if let Err(error) = self.store.save(session) {
            tracing::warn!(%error, "session will not survive this process");
        }
    }
}
