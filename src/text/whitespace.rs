//! Whitespace normalization for selection boundaries.
//!
//! Both functions only look at the whitespace directly adjacent to the range
//! boundaries, so their cost is proportional to the amount of trimmed or
//! absorbed whitespace rather than to the size of the buffer.

use crate::domain::Range;

/// Move `start` forward and `end` backward over whitespace.
///
/// The bounds never cross: a range made only of whitespace collapses to an
/// empty range at its end. Ranges that are not valid for `text` are returned
/// unchanged.
pub fn collapse_inward(text: &str, range: Range) -> Range {
    let Some(slice) = range.slice(text) else {
        return range;
    };

    let without_leading = slice.trim_start();
    let start = range.start + (slice.len() - without_leading.len());
    let end = start + without_leading.trim_end().len();
    Range::new(start, end)
}

/// Move `start` backward and `end` forward over whitespace.
///
/// Ranges that are not valid for `text` are returned unchanged.
pub fn expand_outward(text: &str, range: Range) -> Range {
    if !range.is_valid_in(text) {
        return range;
    }

    let start = text[..range.start].trim_end().len();
    let end = text.len() - text[range.end..].trim_start().len();
    Range::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  foo  ", Range::new(0, 7), Range::new(2, 5))]
    #[case("foo", Range::new(0, 3), Range::new(0, 3))]
    #[case("a\n\n\tb", Range::new(1, 4), Range::new(4, 4))]
    #[case("x   ", Range::new(0, 4), Range::new(0, 1))]
    #[case("\u{3000}y", Range::new(0, 4), Range::new(3, 4))]
    fn test_collapse_inward(#[case] text: &str, #[case] range: Range, #[case] expected: Range) {
        assert_eq!(collapse_inward(text, range), expected);
    }

    #[test]
    fn test_collapse_inward_is_idempotent() {
        let text = "  { a: 1 }\n\n  foo(  bar )  ";
        for start in 0..=text.len() {
            for end in start..=text.len() {
                let once = collapse_inward(text, Range::new(start, end));
                let twice = collapse_inward(text, once);
                assert_eq!(once, twice, "collapse of {start}..{end} is not idempotent");
            }
        }
    }

    #[test]
    fn test_collapse_inward_never_crosses_bounds() {
        let text = "a     b";
        let collapsed = collapse_inward(text, Range::new(1, 6));
        assert!(collapsed.start <= collapsed.end);
        assert_eq!(collapsed, Range::new(6, 6));
    }

    #[test]
    fn test_collapse_inward_leaves_invalid_range_untouched() {
        let range = Range::new(2, 40);
        assert_eq!(collapse_inward("short", range), range);
    }

    #[rstest]
    #[case("f(a,  b)", Range::cursor(4), Range::new(4, 6))]
    #[case("f(a,  b)", Range::cursor(6), Range::new(4, 6))]
    #[case("foo", Range::new(1, 2), Range::new(1, 2))]
    #[case("  x  ", Range::new(2, 3), Range::new(0, 5))]
    fn test_expand_outward(#[case] text: &str, #[case] range: Range, #[case] expected: Range) {
        assert_eq!(expand_outward(text, range), expected);
    }
}
