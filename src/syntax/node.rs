//! Read-only node abstraction consumed by the selection engine.
//!
//! The engine never touches a concrete parser type directly. Anything that can
//! report spans, a coarse kind, and an ordered list of children can drive it.

/// Coarse node classification used for trimming and bracket handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Opening piece of a template literal, e.g. `` `a${ ``.
    TemplateHead,
    /// Piece between two substitutions, e.g. `}b${`.
    TemplateMiddle,
    /// Closing piece of a template literal, e.g. `` }c` ``.
    TemplateTail,
    /// A `${ expr }` substitution. `closing_width` is the width of the closing
    /// brace plus any literal text the node carries after the expression.
    TemplateSpan { closing_width: usize },
    /// Brace-delimited statement block.
    Block,
    /// Object literal `{ ... }`.
    ObjectLiteral,
    /// Object destructuring pattern `{ a, b }`.
    ObjectPattern,
    Other,
}

impl NodeKind {
    /// Number of delimiter bytes to drop from the (leading, trailing) side.
    pub fn delimiter_widths(self) -> (usize, usize) {
        match self {
            NodeKind::TemplateHead => (2, 2),
            NodeKind::TemplateTail => (1, 1),
            NodeKind::TemplateMiddle => (1, 2),
            NodeKind::TemplateSpan { closing_width } => (2, closing_width),
            NodeKind::Block | NodeKind::ObjectLiteral | NodeKind::ObjectPattern | NodeKind::Other => {
                (0, 0)
            }
        }
    }

    /// Whether the node is wrapped in a `{ }` pair whose contents are a
    /// separate selection step.
    pub fn is_bracketed(self) -> bool {
        matches!(
            self,
            NodeKind::Block | NodeKind::ObjectLiteral | NodeKind::ObjectPattern
        )
    }
}

/// A node of a parsed syntax tree.
///
/// `full_start` includes leading trivia (whitespace and comments attached to
/// the node), `start` does not. Both are byte offsets into the parsed text.
pub trait SyntaxNode: Sized {
    fn full_start(&self) -> usize;
    fn start(&self) -> usize;
    fn end(&self) -> usize;
    fn kind(&self) -> NodeKind;
    fn children(&self) -> Vec<Self>;
}
