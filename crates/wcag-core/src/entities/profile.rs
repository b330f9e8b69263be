use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::Role;

/// Server-side profile stored at `user_profile:<id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Unknown role strings deserialize as [`Role::User`].
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(Role::parse_lenient)
        .unwrap_or_default())
}

/// What the client knows about the signed-in user's profile.
///
/// Both fields are optional: a failed profile fetch leaves them empty, and an
/// absent role never grants admin access.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserProfile {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Name if present and non-blank, otherwise `fallback` (usually the e-mail).
    #[must_use]
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => fallback,
        }
    }
}

impl From<Profile> for UserProfile {
    fn from(profile: Profile) -> Self {
        Self {
            name: Some(profile.name).filter(|name| !name.is_empty()),
            role: Some(profile.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_role_is_not_admin() {
        let profile: Profile =
            serde_json::from_str(r#"{"id":"u1","email":"a@b.c","name":"Ana","role":"root"}"#)
                .expect("parse");
        assert_eq!(profile.role, Role::User);
        assert!(!UserProfile::from(profile).is_admin());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"id":"u1"}"#).expect("parse");
        assert_eq!(profile.email, "");
        assert_eq!(profile.role, Role::User);
        assert!(profile.created_at.is_none());
    }

    #[test]
    fn admin_profile_converts() {
        let profile = Profile {
            id: "u1".into(),
            email: "admin@example.com".into(),
            name: "Admin".into(),
            role: Role::Admin,
            created_at: None,
        };
        let user = UserProfile::from(profile);
        assert!(user.is_admin());
        assert_eq!(user.display_name("admin@example.com"), "Admin");
    }

    #[test]
    fn empty_profile_falls_back_to_email() {
        let user = UserProfile::default();
        assert!(!user.is_admin());
        assert_eq!(user.display_name("x@example.com"), "x@example.com");
    }
}
