use serde::{Deserialize, Serialize};

use crate::enums::Level;

/// One WCAG success criterion as displayed to the user.
///
/// Static catalog entries and remote cards both end up in this shape; for a
/// remote card the `id` is its `criterion_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Criterion {
    /// Dotted numeric identifier, e.g. `"1.4.3"`.
    pub id: String,
    pub title: String,
    pub level: Level,
    pub principle: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Link to the W3C "Understanding" document.
    #[serde(default)]
    pub url: String,
}

impl Criterion {
    /// Whether `needle` (already trimmed and lowercased) occurs in any
    /// searchable field.
    #[must_use]
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.level.as_str().to_lowercase().contains(needle)
            || self.principle.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Criterion {
        Criterion {
            id: "2.1.1".into(),
            title: "2.1.1 Keyboard [A]".into(),
            level: Level::A,
            principle: "Operable".into(),
            category: "Keyboard Accessible".into(),
            description: "All functionality is operable through a keyboard interface.".into(),
            keywords: vec!["Navigation".into(), "interaction".into()],
            url: "https://www.w3.org/WAI/WCAG21/Understanding/keyboard.html".into(),
        }
    }

    #[test]
    fn matches_any_searchable_field() {
        let criterion = sample();
        assert!(criterion.contains_lowercase("keyboard"));
        assert!(criterion.contains_lowercase("operable"));
        assert!(criterion.contains_lowercase("navigation"));
        assert!(criterion.contains_lowercase("a"));
    }

    #[test]
    fn does_not_match_url_or_id_only() {
        let mut criterion = sample();
        criterion.title = "Keyboard".into();
        assert!(!criterion.contains_lowercase("understanding"));
        assert!(!criterion.contains_lowercase("2.1.1"));
    }
}
