//! Node to selectable range conversion.

use crate::domain::Range;
use crate::syntax::SyntaxNode;

/// Convert a syntax node into the range a user can select.
///
/// The base range runs from the node's full start (leading trivia included) to
/// its end. Template literal pieces additionally drop their delimiter bytes so
/// that backticks, `${` and `}` are never selected on their own. Returns `None`
/// when the trims would invert the range, which only happens on malformed
/// trees.
pub fn node_to_range<N: SyntaxNode>(node: &N) -> Option<Range> {
    let (leading, trailing) = node.kind().delimiter_widths();
    let start = node.full_start().checked_add(leading)?;
    let end = node.end().checked_sub(trailing)?;
    (start <= end).then_some(Range::new(start, end))
}
