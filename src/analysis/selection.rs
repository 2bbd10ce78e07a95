// Submodules located in src/analysis/selection/*.rs
pub mod brackets;
pub mod hierarchy_chain;
pub mod range_builder;

// Re-export from submodules
pub use brackets::exclude_brackets;
pub use hierarchy_chain::is_strict_growth;
pub use range_builder::node_to_range;

use log::{debug, warn};
use tree_sitter::Tree;

use crate::domain::Range;
use crate::error::{SelectError, SelectResult};
use crate::language::{ParserFactory, SupportedLanguage};
use crate::syntax::{SyntaxNode, SyntaxView, resolve_path};
use crate::text::{collapse_inward, expand_outward};

/// Per-strategy switches, fixed for the lifetime of a strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrategyOptions {
    /// Absorb whitespace around the selection before resolving ancestors.
    pub expand_whitespace: bool,
    /// Treat the inside of `{ }` constructs as a separate step.
    pub exclude_brackets: bool,
}

/// Computes the next enclosing syntactic range for each selection.
pub trait SelectionStrategy {
    /// Grow every selection in `selections` over `text`.
    ///
    /// The result has one entry per input selection, in the same order.
    /// `None` means that selection has no larger enclosing unit and must be
    /// left as it is.
    fn grow(&self, text: &str, selections: &[Range]) -> Vec<Option<Range>>;
}

/// Strategy backed by a bundled tree-sitter grammar.
///
/// The text is reparsed on every call and the tree is dropped afterwards.
#[derive(Clone, Debug)]
pub struct TreeSitterStrategy {
    language: SupportedLanguage,
    options: StrategyOptions,
}

impl TreeSitterStrategy {
    pub fn new(language: SupportedLanguage, options: StrategyOptions) -> Self {
        Self { language, options }
    }

    pub fn language(&self) -> SupportedLanguage {
        self.language
    }

    pub fn options(&self) -> StrategyOptions {
        self.options
    }

    fn parse(&self, text: &str) -> SelectResult<Tree> {
        let mut parser = ParserFactory::create(self.language)?;
        parser
            .parse(text, None)
            .ok_or_else(|| SelectError::parse(self.language.id()))
    }
}

impl SelectionStrategy for TreeSitterStrategy {
    fn grow(&self, text: &str, selections: &[Range]) -> Vec<Option<Range>> {
        let tree = match self.parse(text) {
            Ok(tree) => tree,
            Err(e) => {
                warn!(target: "syntax_select::selection", "Cannot grow selection: {}", e);
                return vec![None; selections.len()];
            }
        };
        let root = SyntaxView::root(&tree, self.language, text.len());

        selections
            .iter()
            .map(|selection| expand_selection(text, root, *selection, self.options))
            .collect()
    }
}

/// Compute the next enclosing range of `current` within the tree at `root`.
///
/// Walks the ancestor path from the innermost node outward and returns the
/// first node range (after whitespace trimming) that strictly grows the
/// selection. With whitespace expansion enabled, the ancestor path is resolved
/// for the selection widened over its adjacent whitespace; candidates must
/// still strictly grow `current` itself.
pub fn expand_selection<N: SyntaxNode>(
    text: &str,
    root: N,
    current: Range,
    options: StrategyOptions,
) -> Option<Range> {
    if !current.is_valid_in(text) {
        debug!(
            target: "syntax_select::selection",
            "Ignoring selection {}..{} outside of text (len {})",
            current.start,
            current.end,
            text.len()
        );
        return None;
    }

    let search = if options.expand_whitespace {
        expand_outward(text, current)
    } else {
        current
    };

    let path = resolve_path(root, search.start, search.end);
    let (node, candidate) = path.iter().rev().find_map(|node| {
        let range = node_to_range(node).filter(|range| range.is_valid_in(text))?;
        let candidate = collapse_inward(text, range);
        is_strict_growth(&candidate, &current).then_some((node, candidate))
    })?;

    let expanded = if options.exclude_brackets && node.kind().is_bracketed() {
        let braces = Range::new(node.start(), node.end());
        exclude_brackets(text, candidate, braces, current)
    } else {
        candidate
    };

    debug!(
        target: "syntax_select::selection",
        "Grew {}..{} to {}..{} ({:?})",
        current.start,
        current.end,
        expanded.start,
        expanded.end,
        node.kind()
    );
    Some(expanded)
}
