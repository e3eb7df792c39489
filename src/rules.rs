//! The matching rule.

use crate::card::{Card, FEATURE_COUNT};

/// Returns whether one feature is all-equal or all-different across three cards.
#[must_use]
pub(crate) fn feature_matches(a: &Card, b: &Card, c: &Card, feature: usize) -> bool {
    let (x, y, z) = (a.feature(feature), b.feature(feature), c.feature(feature));
    let all_same = x == y && y == z;
    let all_different = x != y && y != z && x != z;
    all_same || all_different
}

/// Returns whether three cards form a match.
///
/// Every feature must be either the same on all three cards or different on
/// all three. Argument order does not matter.
///
/// # Example
///
/// ```
/// use setrs::{Card, Variant, is_match};
///
/// let a = Card::from_features([Variant::V1, Variant::V1, Variant::V1, Variant::V1]);
/// let b = Card::from_features([Variant::V1, Variant::V1, Variant::V1, Variant::V2]);
/// let c = Card::from_features([Variant::V1, Variant::V1, Variant::V1, Variant::V3]);
/// assert!(is_match(&a, &b, &c));
/// ```
#[must_use]
pub fn is_match(a: &Card, b: &Card, c: &Card) -> bool {
    (0..FEATURE_COUNT).all(|feature| feature_matches(a, b, c, feature))
}

/// Finds the first matching triple among `cards`.
///
/// Returns positions into `cards` in ascending order, or `None` if no three
/// of them match.
#[must_use]
pub fn find_match(cards: &[Card]) -> Option<[usize; 3]> {
    let len = cards.len();
    for i in 0..len {
        for j in (i + 1)..len {
            for k in (j + 1)..len {
                if is_match(&cards[i], &cards[j], &cards[k]) {
                    return Some([i, j, k]);
                }
            }
        }
    }
    None
}
