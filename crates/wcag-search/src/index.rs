use serde::Serialize;
use wcag_core::{Criterion, StoredCard};

use crate::filter::filter;
use crate::merge::merge;

/// Sizes reported in the list footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    /// Entries in the static catalog.
    pub standard: usize,
    /// Remote cards received, including shadowed ones.
    pub custom: usize,
    /// Records actually displayed after merging.
    pub merged: usize,
}

/// The merged, sorted criterion list plus its counts.
#[derive(Debug, Clone, Default)]
pub struct CriteriaIndex {
    criteria: Vec<Criterion>,
    counts: CatalogCounts,
}

impl CriteriaIndex {
    #[must_use]
    pub fn build(static_criteria: &[Criterion], remote: &[StoredCard]) -> Self {
        let criteria = merge(static_criteria, remote);
        let counts = CatalogCounts {
            standard: static_criteria.len(),
            custom: remote.len(),
            merged: criteria.len(),
        };
        Self { criteria, counts }
    }

    /// Index over the static catalog alone.
    #[must_use]
    pub fn offline(static_criteria: &[Criterion]) -> Self {
        Self::build(static_criteria, &[])
    }

    #[must_use]
    pub fn all(&self) -> &[Criterion] {
        &self.criteria
    }

    #[must_use]
    pub const fn counts(&self) -> CatalogCounts {
        self.counts
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Criterion> {
        filter(&self.criteria, query)
    }

    /// First displayed record with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Criterion> {
        let id = id.trim();
        self.criteria.iter().find(|c| c.id == id)
    }
}
