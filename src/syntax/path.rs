//! Ancestor path resolution.

use super::node::SyntaxNode;

/// Collect every node whose full span contains `[start, end)`, root first.
///
/// A node is kept, and its children visited, only when
/// `full_start <= start && end <= node.end`. Subtrees that do not contain the
/// range are pruned. An empty result means not even the root contains the
/// range, which callers treat as "no expansion".
pub fn resolve_path<N: SyntaxNode>(root: N, start: usize, end: usize) -> Vec<N> {
    let mut path = Vec::new();
    collect_path(root, start, end, &mut path);
    path
}

fn collect_path<N: SyntaxNode>(node: N, start: usize, end: usize, path: &mut Vec<N>) {
    if start < node.full_start() || end > node.end() {
        return;
    }
    let children = node.children();
    path.push(node);
    for child in children {
        collect_path(child, start, end, path);
    }
}
