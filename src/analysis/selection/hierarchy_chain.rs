//! Growth test between a candidate range and the current selection.

use crate::domain::Range;

/// Check if `candidate` is a strict growth of `current`.
///
/// One boundary must move strictly outward while the other stays put or also
/// moves outward. Equal ranges, shrinking ranges, and disjoint ranges are all
/// rejected, so a candidate that passes is always a strict superset.
pub fn is_strict_growth(candidate: &Range, current: &Range) -> bool {
    (candidate.start < current.start && candidate.end >= current.end)
        || (candidate.end > current.end && candidate.start <= current.start)
}
