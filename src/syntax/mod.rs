pub mod node;
pub mod path;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_tree;

// Re-export main types
pub use node::{NodeKind, SyntaxNode};
pub use path::resolve_path;
pub use tree::SyntaxView;
