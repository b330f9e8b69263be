//! Hosted auth provider, reached through its admin and user endpoints.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{IdentityError, IdentityProvider, IdentityUser, NewAccount};

#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl ProviderError {
    fn text(self) -> String {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .unwrap_or_else(|| "request rejected".to_string())
    }
}

pub struct HostedIdentity {
    http: reqwest::Client,
    auth_url: String,
    service_key: String,
}

impl HostedIdentity {
    /// # Errors
    ///
    /// Returns [`IdentityError::Http`] if the HTTP client fails to build.
    pub fn new(project_url: &str, service_key: &str) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wcag-server/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            auth_url: format!("{}/auth/v1", project_url.trim_end_matches('/')),
            service_key: service_key.to_string(),
        })
    }
}

/// Map a non-success admin response to an [`IdentityError`].
fn rejection(status: u16, body: &str) -> IdentityError {
    let parsed = serde_json::from_str::<ProviderError>(body).ok();
    let duplicate = parsed
        .as_ref()
        .and_then(|e| e.error_code.as_deref())
        .is_some_and(|code| code == "email_exists" || code == "user_already_exists");
    if duplicate || (status == 422 && body.contains("already been registered")) {
        return IdentityError::DuplicateEmail;
    }
    IdentityError::Rejected(parsed.map_or_else(|| body.trim().to_string(), ProviderError::text))
}

#[async_trait]
impl IdentityProvider for HostedIdentity {
    async fn create_user(&self, account: NewAccount) -> Result<IdentityUser, IdentityError> {
        let body = json!({
            "email": account.email,
            "password": account.password,
            "email_confirm": true,
            "user_metadata": { "name": account.name, "role": account.role.as_str() },
        });
        let resp = self
            .http
            .post(format!("{}/admin/users", self.auth_url))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &text));
        }
        Ok(resp.json().await?)
    }

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        let resp = self
            .http
            .get(format!("{}/user", self.auth_url))
            .header("apikey", &self.service_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        match resp.status().as_u16() {
            200..=299 => Ok(resp.json().await?),
            400 | 401 | 403 | 404 => Err(IdentityError::InvalidToken),
            status => {
                let text = resp.text().await.unwrap_or_default();
                Err(rejection(status, &text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_is_recognized() {
        let body = r#"{"code":422,"error_code":"email_exists","msg":"A user with this email address has already been registered"}"#;
        assert!(matches!(rejection(422, body), IdentityError::DuplicateEmail));
    }

    #[test]
    fn other_rejections_keep_provider_message() {
        let body = r#"{"code":422,"error_code":"weak_password","msg":"Password should be at least 6 characters."}"#;
        match rejection(422, body) {
            IdentityError::Rejected(message) => {
                assert_eq!(message, "Password should be at least 6 characters.");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn user_payload_parses() {
        let user: IdentityUser = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.c","user_metadata":{"name":"Ana","role":"admin"},"created_at":"2024-01-01T00:00:00Z","aud":"authenticated"}"#,
        )
        .expect("parse");
        assert_eq!(user.user_metadata.role.as_deref(), Some("admin"));
        assert!(user.created_at.is_some());
    }
}
