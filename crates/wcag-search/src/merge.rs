use std::collections::HashSet;

use wcag_core::{Criterion, StoredCard};

use crate::order::sort_by_id;

/// Merge the static catalog with remote cards and sort the result.
///
/// A remote card is appended only when no entry already in the merged list
/// shares its `criterion_id`, so static entries win collisions and, among
/// remote cards, the first one encountered wins.
#[must_use]
pub fn merge(static_criteria: &[Criterion], remote: &[StoredCard]) -> Vec<Criterion> {
    let mut merged = static_criteria.to_vec();
    let mut seen: HashSet<String> = merged.iter().map(|c| c.id.clone()).collect();

    for card in remote {
        if seen.insert(card.criterion_id.clone()) {
            merged.push(card.to_criterion());
        } else {
            tracing::debug!(
                card_id = %card.id,
                criterion_id = %card.criterion_id,
                "remote card shadowed by an existing id"
            );
        }
    }

    sort_by_id(&mut merged);
    merged
}
