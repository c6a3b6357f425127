//! Tree access for Go source files.
//!
//! - `parser`: tree-sitter based parser that lowers into the closed tree
//! - `tree`: node types, spans and the pre-order walk

mod parser;
mod tree;

pub use parser::{ParseError, parse_go_source};
pub use tree::{
    CallExpr, Ident, Literal, LiteralKind, Node, OtherNode, PreOrder, SelectorExpr, Span,
    SyntaxTree,
};
