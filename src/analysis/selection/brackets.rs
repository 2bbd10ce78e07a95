//! Bracket exclusion: the inside of a `{ }` pair is its own selection step.

use super::hierarchy_chain::is_strict_growth;
use crate::domain::Range;
use crate::text::collapse_inward;

/// Pick between the candidate range `outer` and the contents of its braces.
///
/// `braces` is the node's own span, without leading trivia, so a comment in
/// front of the `{` does not hide the pair. When `current` already covers the
/// contents (with or without the padding whitespace next to the braces), or
/// the contents would not grow `current`, `outer` is returned. Otherwise the
/// contents are returned so the next step lands inside the braces. `outer` is
/// also returned when `braces` is not actually delimited by `{` and `}`.
pub fn exclude_brackets(text: &str, outer: Range, braces: Range, current: Range) -> Range {
    let Some(slice) = braces.slice(text) else {
        return outer;
    };
    if slice.len() < 2 || !slice.starts_with('{') || !slice.ends_with('}') {
        return outer;
    }

    let padded = Range::new(braces.start + 1, braces.end - 1);
    let contents = collapse_inward(text, padded);
    if current == padded || current == contents || !is_strict_growth(&contents, &current) {
        outer
    } else {
        contents
    }
}
