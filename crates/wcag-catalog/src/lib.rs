//! # wcag-catalog
//!
//! The fixed catalog of WCAG 2.1 and 2.2 success criteria, in ascending id
//! order. Entries are compiled into the binary and never change at runtime.

mod data;

use wcag_core::{Criterion, Level, Principle};

/// Compile-time description of one catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    id: &'static str,
    name: &'static str,
    level: Level,
    principle: Principle,
    category: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    version: u8,
    slug: &'static str,
    removed: bool,
}

impl Entry {
    const fn new(
        id: &'static str,
        name: &'static str,
        level: Level,
        principle: Principle,
        category: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            level,
            principle,
            category,
            description: "",
            keywords: &[],
            version: 21,
            slug: "",
            removed: false,
        }
    }

    const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    const fn keywords(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords = keywords;
        self
    }

    /// `version` is 21 or 22, selecting the "Understanding" document set.
    const fn link(mut self, version: u8, slug: &'static str) -> Self {
        self.version = version;
        self.slug = slug;
        self
    }

    const fn removed(mut self) -> Self {
        self.removed = true;
        self
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Whether the criterion was withdrawn in a later WCAG version.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.removed
    }

    #[must_use]
    pub fn title(&self) -> String {
        let tag = if self.removed {
            "REMOVED"
        } else {
            self.level.as_str()
        };
        format!("{} {} [{tag}]", self.id, self.name)
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "https://www.w3.org/WAI/WCAG{}/Understanding/{}.html",
            self.version, self.slug
        )
    }

    #[must_use]
    pub fn to_criterion(&self) -> Criterion {
        Criterion {
            id: self.id.to_string(),
            title: self.title(),
            level: self.level,
            principle: self.principle.as_str().to_string(),
            category: self.category.to_string(),
            description: self.description.to_string(),
            keywords: self.keywords.iter().map(|k| (*k).to_string()).collect(),
            url: self.url(),
        }
    }
}

/// Raw entries in catalog order.
#[must_use]
pub fn entries() -> &'static [Entry] {
    data::ENTRIES
}

/// The whole catalog as display records, in ascending id order.
#[must_use]
pub fn criteria() -> Vec<Criterion> {
    data::ENTRIES.iter().map(Entry::to_criterion).collect()
}

/// Look up one static criterion by its dotted id.
#[must_use]
pub fn get(id: &str) -> Option<Criterion> {
    let id = id.trim();
    data::ENTRIES
        .iter()
        .find(|entry| entry.id == id)
        .map(Entry::to_criterion)
}

#[must_use]
pub fn len() -> usize {
    data::ENTRIES.len()
}
