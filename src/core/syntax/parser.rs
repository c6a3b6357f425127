//! Go source parser built on tree-sitter.
//!
//! The concrete tree-sitter tree is lowered into the closed [`Node`] enum
//! right after parsing, so the rest of the engine never touches tree-sitter
//! types.

use thiserror::Error;
use tree_sitter::{Node as TsNode, Parser};

use super::tree::{
    CallExpr, Ident, Literal, LiteralKind, Node, OtherNode, SelectorExpr, Span, SyntaxTree,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("failed to load the Go grammar: {0}")]
    Language(String),
    #[error("parser produced no tree")]
    NoTree,
    #[error("syntax error at {line}:{column}")]
    Syntax { line: usize, column: usize },
}

/// Parse Go source into a [`SyntaxTree`].
///
/// Any syntax error rejects the whole file, mirroring how the Go toolchain
/// refuses to build a package with an unparsable file.
pub fn parse_go_source(source: &str) -> Result<SyntaxTree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| ParseError::Language(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();

    if root.has_error() {
        let position = first_error(root)
            .map(|node| node.start_position())
            .unwrap_or_else(|| root.start_position());
        return Err(ParseError::Syntax {
            line: position.row + 1,
            column: position.column + 1,
        });
    }

    let mut cursor = root.walk();
    let decls = root
        .named_children(&mut cursor)
        .filter(|child| !matches!(child.kind(), "package_clause" | "comment"))
        .map(|child| lower(child, source))
        .collect();

    Ok(SyntaxTree { decls })
}

fn first_error(node: TsNode<'_>) -> Option<TsNode<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<TsNode<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

fn span_of(node: TsNode<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

fn lower(node: TsNode<'_>, source: &str) -> Node {
    let span = span_of(node);

    match node.kind() {
        "call_expression" => lower_call(node, source).unwrap_or_else(|| lower_other(node, source)),
        "selector_expression" => {
            lower_selector(node, source).unwrap_or_else(|| lower_other(node, source))
        }
        // Go's AST treats the predeclared names as plain identifiers
        "identifier" | "nil" | "true" | "false" | "iota" => Node::Ident(ident(node, source)),
        "variadic_argument" => {
            lower_variadic(node, source).unwrap_or_else(|| lower_other(node, source))
        }
        "interpreted_string_literal" => literal(span, LiteralKind::String),
        "raw_string_literal" => literal(span, LiteralKind::RawString),
        "int_literal" => literal(span, LiteralKind::Int),
        "float_literal" => literal(span, LiteralKind::Float),
        "imaginary_literal" => literal(span, LiteralKind::Imaginary),
        "rune_literal" => literal(span, LiteralKind::Rune),
        _ => lower_other(node, source),
    }
}

fn lower_call(node: TsNode<'_>, source: &str) -> Option<Node> {
    let callee = node.child_by_field_name("function")?;
    let args = match node.child_by_field_name("arguments") {
        Some(list) => {
            let mut cursor = list.walk();
            list.named_children(&mut cursor)
                .filter(|arg| arg.kind() != "comment")
                .map(|arg| lower(arg, source))
                .collect()
        }
        None => Vec::new(),
    };

    Some(Node::Call(CallExpr {
        span: span_of(node),
        callee: Box::new(lower(callee, source)),
        args,
    }))
}

fn lower_selector(node: TsNode<'_>, source: &str) -> Option<Node> {
    let operand = node.child_by_field_name("operand")?;
    let field = node.child_by_field_name("field")?;

    Some(Node::Selector(SelectorExpr {
        span: span_of(node),
        operand: Box::new(lower(operand, source)),
        field: ident(field, source),
    }))
}

/// `args...` is the spread identifier itself; the `...` belongs to the call.
fn lower_variadic(node: TsNode<'_>, source: &str) -> Option<Node> {
    let inner = node.named_child(0)?;
    if node.named_child_count() != 1 || inner.kind() != "identifier" {
        return None;
    }
    Some(Node::Ident(ident(inner, source)))
}

fn lower_other(node: TsNode<'_>, source: &str) -> Node {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .map(|child| lower(child, source))
        .collect();

    Node::Other(OtherNode {
        span: span_of(node),
        kind: node.kind(),
        children,
    })
}

fn ident(node: TsNode<'_>, source: &str) -> Ident {
    let span = span_of(node);
    Ident {
        span,
        name: span.text(source).unwrap_or_default().to_string(),
    }
}

fn literal(span: Span, kind: LiteralKind) -> Node {
    Node::Literal(Literal { span, kind })
}
