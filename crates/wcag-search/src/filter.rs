use wcag_core::Criterion;

/// Keep the records whose searchable text contains `query`.
///
/// The query is trimmed and lowercased; a blank query keeps everything. The
/// input order is preserved, there is no relevance ranking.
#[must_use]
pub fn filter<'a>(merged: &'a [Criterion], query: &str) -> Vec<&'a Criterion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return merged.iter().collect();
    }
    merged
        .iter()
        .filter(|criterion| criterion.contains_lowercase(&needle))
        .collect()
}
