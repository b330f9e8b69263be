use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{IdentityError, IdentityProvider, IdentityUser, NewAccount, UserMetadata};

#[derive(Debug, Clone)]
struct Account {
    user: IdentityUser,
    password: String,
}

/// Access and refresh token pair minted for a password or refresh grant.
#[derive(Debug, Clone)]
pub struct LocalSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: IdentityUser,
}

/// In-process identity provider for local runs and tests.
///
/// Tokens are opaque strings handed out by [`MemoryIdentity::sign_in`] and
/// [`MemoryIdentity::issue_token`]; they stay valid until revoked. Refresh
/// tokens are single use.
#[derive(Debug, Default)]
pub struct MemoryIdentity {
    accounts: RwLock<HashMap<String, Account>>,
    tokens: RwLock<HashMap<String, String>>,
    refresh_tokens: RwLock<HashMap<String, String>>,
    counter: AtomicU64,
}

impl MemoryIdentity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Mint a token for an existing user id.
    pub async fn issue_token(&self, user_id: &str) -> Option<String> {
        let accounts = self.accounts.read().await;
        if !accounts.values().any(|account| account.user.id == user_id) {
            return None;
        }
        drop(accounts);
        let token = format!("mem-token-{}-{}", self.next(), Utc::now().timestamp_micros());
        self.tokens
            .write()
            .await
            .insert(token.clone(), user_id.to_string());
        Some(token)
    }

    /// Check e-mail and password and mint a token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Option<(String, IdentityUser)> {
        let user = {
            let accounts = self.accounts.read().await;
            let account = accounts.get(&email.trim().to_lowercase())?;
            if account.password != password {
                return None;
            }
            account.user.clone()
        };
        let token = self.issue_token(&user.id).await?;
        Some((token, user))
    }

    pub async fn revoke(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }

    /// Password grant: an access token plus a refresh token.
    pub async fn start_session(&self, email: &str, password: &str) -> Option<LocalSession> {
        let (access_token, user) = self.sign_in(email, password).await?;
        let refresh_token = self.issue_refresh_token(&user.id).await;
        Some(LocalSession {
            access_token,
            refresh_token,
            user,
        })
    }

    /// Refresh grant. The presented refresh token is consumed.
    pub async fn refresh_session(&self, refresh_token: &str) -> Option<LocalSession> {
        let user_id = self.refresh_tokens.write().await.remove(refresh_token)?;
        let user = self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.user.id == user_id)
            .map(|account| account.user.clone())?;
        let access_token = self.issue_token(&user.id).await?;
        let refresh_token = self.issue_refresh_token(&user.id).await;
        Some(LocalSession {
            access_token,
            refresh_token,
            user,
        })
    }

    /// Revoke `access_token` and every refresh token of its user.
    /// Returns `false` for an unknown token.
    pub async fn end_session(&self, access_token: &str) -> bool {
        let Some(user_id) = self.tokens.write().await.remove(access_token) else {
            return false;
        };
        self.refresh_tokens
            .write()
            .await
            .retain(|_, owner| *owner != user_id);
        true
    }

    async fn issue_refresh_token(&self, user_id: &str) -> String {
        let token = format!("mem-refresh-{}-{}", self.next(), Utc::now().timestamp_micros());
        self.refresh_tokens
            .write()
            .await
            .insert(token.clone(), user_id.to_string());
        token
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn create_user(&self, account: NewAccount) -> Result<IdentityUser, IdentityError> {
        let email = account.email.trim().to_lowercase();
        if account.password.len() < 6 {
            return Err(IdentityError::Rejected(
                "password should be at least 6 characters".to_string(),
            ));
        }
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(IdentityError::DuplicateEmail);
        }
        let user = IdentityUser {
            id: format!("user-{}", self.next()),
            email: email.clone(),
            user_metadata: UserMetadata {
                name: Some(account.name),
                role: Some(account.role.as_str().to_string()),
            },
            created_at: Some(Utc::now()),
        };
        accounts.insert(
            email,
            Account {
                user: user.clone(),
                password: account.password,
            },
        );
        Ok(user)
    }

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        let user_id = self
            .tokens
            .read()
            .await
            .get(access_token)
            .cloned()
            .ok_or(IdentityError::InvalidToken)?;
        self.accounts
            .read()
            .await
            .values()
            .find(|account| account.user.id == user_id)
            .map(|account| account.user.clone())
            .ok_or(IdentityError::InvalidToken)
    }
}
