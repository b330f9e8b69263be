//! Dotted numeric id ordering (`1.2.1 < 1.10.1`).

use std::cmp::Ordering;

use wcag_core::Criterion;

/// Digits at the start of a segment, without leading zeros.
///
/// A segment with no leading digit counts as zero.
fn leading_number(segment: &str) -> &str {
    let segment = segment.trim_start();
    let end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    segment[..end].trim_start_matches('0')
}

/// Compare two decimal digit strings without leading zeros by value.
fn compare_numbers(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two dotted ids segment by segment as integers.
///
/// The shorter id is padded with zero segments, so `"1.2"` equals `"1.2.0"`.
#[must_use]
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.').map(leading_number);
    let mut right = b.split('.').map(leading_number);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let ordering = compare_numbers(l.unwrap_or(""), r.unwrap_or(""));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// Stable sort by [`compare_ids`]; equal ids keep their relative order.
pub fn sort_by_id(criteria: &mut [Criterion]) {
    criteria.sort_by(|a, b| compare_ids(&a.id, &b.id));
}
