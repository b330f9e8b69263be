use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Criterion;
use crate::enums::Level;
use crate::errors::CoreError;

/// A custom criterion card persisted in the remote key-value store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredCard {
    /// Store key suffix: creation timestamp in milliseconds.
    pub id: String,
    pub criterion_id: String,
    pub title: String,
    pub level: Level,
    pub principle: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredCard {
    /// Display form of the card: its `criterion_id` becomes the record id.
    #[must_use]
    pub fn to_criterion(&self) -> Criterion {
        Criterion {
            id: self.criterion_id.clone(),
            title: self.title.clone(),
            level: self.level,
            principle: self.principle.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            url: self.url.clone().unwrap_or_default(),
        }
    }
}

/// Fields submitted to create a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCard {
    pub criterion_id: String,
    pub title: String,
    pub level: Level,
    pub principle: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NewCard {
    /// Names of required text fields that are empty or whitespace.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("criterion_id", &self.criterion_id),
            ("title", &self.title),
            ("principle", &self.principle),
            ("category", &self.category),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Reject a card with any required field missing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming every missing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Partial update of a stored card. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criterion_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CardPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.criterion_id.is_none()
            && self.title.is_none()
            && self.level.is_none()
            && self.principle.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.keywords.is_none()
            && self.url.is_none()
    }

    /// Merge the present fields into `card` and stamp `updated_at`.
    pub fn apply_to(self, card: &mut StoredCard, now: DateTime<Utc>) {
        if let Some(value) = self.criterion_id {
            card.criterion_id = value;
        }
        if let Some(value) = self.title {
            card.title = value;
        }
        if let Some(value) = self.level {
            card.level = value;
        }
        if let Some(value) = self.principle {
            card.principle = value;
        }
        if let Some(value) = self.category {
            card.category = value;
        }
        if let Some(value) = self.description {
            card.description = value;
        }
        if let Some(value) = self.keywords {
            card.keywords = value;
        }
        if let Some(value) = self.url {
            card.url = Some(value);
        }
        card.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn new_card() -> NewCard {
        NewCard {
            criterion_id: "9.9.9".into(),
            title: "9.9.9 Custom [AA]".into(),
            level: Level::Aa,
            principle: "Robust".into(),
            category: "Compatible".into(),
            description: "A custom criterion.".into(),
            keywords: vec!["custom".into()],
            url: None,
        }
    }

    fn stored() -> StoredCard {
        let created = DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp");
        StoredCard {
            id: "1700000000000".into(),
            criterion_id: "9.9.9".into(),
            title: "9.9.9 Custom [AA]".into(),
            level: Level::Aa,
            principle: "Robust".into(),
            category: "Compatible".into(),
            description: "A custom criterion.".into(),
            keywords: Vec::new(),
            url: None,
            created_by: "user-1".into(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn complete_card_validates() {
        assert!(new_card().validate().is_ok());
    }

    #[test]
    fn validation_names_every_missing_field() {
        let card = NewCard {
            title: String::new(),
            category: "   ".into(),
            ..new_card()
        };
        assert_eq!(card.missing_fields(), vec!["title", "category"]);
        let err = card.validate().expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "validation error: missing required fields: title, category"
        );
    }

    #[test]
    fn display_form_uses_criterion_id() {
        let criterion = stored().to_criterion();
        assert_eq!(criterion.id, "9.9.9");
        assert_eq!(criterion.url, "");
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut card = stored();
        let later = card.created_at + chrono::TimeDelta::minutes(5);
        CardPatch {
            title: Some("Renamed".into()),
            level: Some(Level::Aaa),
            ..CardPatch::default()
        }
        .apply_to(&mut card, later);

        assert_eq!(card.title, "Renamed");
        assert_eq!(card.level, Level::Aaa);
        assert_eq!(card.description, "A custom criterion.");
        assert_eq!(card.updated_at, later);
        assert!(card.updated_at > card.created_at);
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = CardPatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).expect("json"), "{}");
    }

    #[test]
    fn stored_card_tolerates_missing_keywords_and_url() {
        let json = r#"{
            "id": "1", "criterion_id": "5.1.1", "title": "t", "level": "AAA",
            "principle": "p", "category": "c", "description": "d",
            "created_by": "u", "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let card: StoredCard = serde_json::from_str(json).expect("parse");
        assert!(card.keywords.is_empty());
        assert!(card.url.is_none());
        assert_eq!(card.level, Level::Aaa);
    }
}
