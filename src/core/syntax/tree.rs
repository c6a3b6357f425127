//! Closed syntax tree for Go source files.
//!
//! The tree only distinguishes the node categories the lint engine cares
//! about (calls, selectors, literals, identifiers). Everything else is kept
//! as an opaque [`Node::Other`] so that nested calls are still reachable.

use serde::Serialize;

/// Half-open byte range `[start, end)` into a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Source text covered by this span.
    ///
    /// Returns `None` when the span is out of bounds or does not fall on
    /// character boundaries.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// Kind of a basic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// Interpreted string: `"..."`
    String,
    /// Raw string: `` `...` ``
    RawString,
    Int,
    Float,
    Imaginary,
    Rune,
}

impl LiteralKind {
    pub fn is_string(self) -> bool {
        matches!(self, LiteralKind::String | LiteralKind::RawString)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub span: Span,
    pub kind: LiteralKind,
}

/// `operand.field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorExpr {
    pub span: Span,
    pub operand: Box<Node>,
    pub field: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub span: Span,
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}

/// Any node the engine does not inspect directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherNode {
    pub span: Span,
    pub kind: &'static str,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Call(CallExpr),
    Selector(SelectorExpr),
    Literal(Literal),
    Ident(Ident),
    Other(OtherNode),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Call(call) => call.span,
            Node::Selector(selector) => selector.span,
            Node::Literal(literal) => literal.span,
            Node::Ident(ident) => ident.span,
            Node::Other(other) => other.span,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Call(call) => std::iter::once(call.callee.as_ref())
                .chain(call.args.iter())
                .collect(),
            Node::Selector(selector) => vec![selector.operand.as_ref()],
            Node::Literal(_) | Node::Ident(_) => Vec::new(),
            Node::Other(other) => other.children.iter().collect(),
        }
    }

    /// Lazy pre-order, depth-first traversal starting at this node.
    ///
    /// Nodes are yielded in ascending start offset.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

/// Top-level declarations of one parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub decls: Vec<Node>,
}
