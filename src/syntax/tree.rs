use tree_sitter::{Node, Tree};

use super::node::{NodeKind, SyntaxNode};
use crate::language::SupportedLanguage;

/// Borrowed view of a tree-sitter node with its trivia-inclusive start.
///
/// tree-sitter does not attach whitespace or comments to tokens, so the full
/// start of a node is derived while walking down from the root: it is the end
/// of the previous non-extra sibling, or the parent's full start when the node
/// comes first. Extras (comments) are skipped and thus become leading trivia of
/// whatever follows them.
#[derive(Clone, Copy, Debug)]
pub struct SyntaxView<'tree> {
    node: Node<'tree>,
    language: SupportedLanguage,
    full_start: usize,
    end: usize,
}

impl<'tree> SyntaxView<'tree> {
    /// View of the root node, stretched to cover the whole text.
    pub fn root(tree: &'tree Tree, language: SupportedLanguage, text_len: usize) -> Self {
        let node = tree.root_node();
        Self {
            node,
            language,
            full_start: 0,
            end: node.end_byte().max(text_len),
        }
    }

    pub fn node(&self) -> Node<'tree> {
        self.node
    }
}

impl SyntaxNode for SyntaxView<'_> {
    fn full_start(&self) -> usize {
        self.full_start
    }

    fn start(&self) -> usize {
        self.node.start_byte()
    }

    fn end(&self) -> usize {
        self.end
    }

    fn kind(&self) -> NodeKind {
        self.language.classify(self.node.kind())
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        let mut previous_end = self.full_start;
        let mut children = Vec::new();

        for child in self.node.children(&mut cursor) {
            if child.is_extra() {
                continue;
            }
            if child.is_named() {
                children.push(SyntaxView {
                    node: child,
                    language: self.language,
                    full_start: previous_end.min(child.start_byte()),
                    end: child.end_byte(),
                });
            }
            previous_end = child.end_byte();
        }

        children
    }
}
