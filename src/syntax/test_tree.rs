//! Hand-built syntax trees for unit tests that need node shapes no bundled
//! grammar produces.

use super::node::{NodeKind, SyntaxNode};

#[derive(Clone, Debug)]
pub struct TestNode {
    pub name: &'static str,
    pub full_start: usize,
    pub start: usize,
    pub end: usize,
    pub kind: NodeKind,
    pub children: Vec<TestNode>,
}

impl TestNode {
    pub fn new(name: &'static str, full_start: usize, start: usize, end: usize) -> Self {
        Self {
            name,
            full_start,
            start,
            end,
            kind: NodeKind::Other,
            children: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn child(mut self, child: TestNode) -> Self {
        self.children.push(child);
        self
    }
}

impl SyntaxNode for TestNode {
    fn full_start(&self) -> usize {
        self.full_start
    }

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn children(&self) -> Vec<Self> {
        self.children.clone()
    }
}

/// Tree for `` x = `a${b}c${d}e`; `` shaped the way a TypeScript compiler
/// reports it: head, then spans whose literal (middle or tail) is part of
/// the span.
///
/// ```text
/// 0         1
/// 0123456789012345678
/// x = `a${b}c${d}e`;
/// ```
pub fn compiler_template_tree() -> TestNode {
    let head = TestNode::new("head", 3, 4, 8).kind(NodeKind::TemplateHead);
    let middle = TestNode::new("middle", 9, 9, 13).kind(NodeKind::TemplateMiddle);
    let tail = TestNode::new("tail", 14, 14, 17).kind(NodeKind::TemplateTail);
    let first_span = TestNode::new("span_b", 6, 8, 13)
        .kind(NodeKind::TemplateSpan { closing_width: 4 })
        .child(TestNode::new("b", 8, 8, 9))
        .child(middle);
    let second_span = TestNode::new("span_d", 11, 13, 17)
        .kind(NodeKind::TemplateSpan { closing_width: 3 })
        .child(TestNode::new("d", 13, 13, 14))
        .child(tail);
    let template = TestNode::new("template", 3, 4, 17)
        .child(head)
        .child(first_span)
        .child(second_span);
    let assignment = TestNode::new("assignment", 0, 0, 17)
        .child(TestNode::new("x", 0, 0, 1))
        .child(template);
    TestNode::new("source_file", 0, 0, 18)
        .child(TestNode::new("statement", 0, 0, 18).child(assignment))
}
