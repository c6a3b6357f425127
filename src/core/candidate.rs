//! Candidate filter.
//!
//! Selects call expressions shaped like `receiver.Method("literal", ident)`.
//! Nodes that do not match are skipped, but their children are still
//! visited so nested calls are found.

use super::syntax::{Node, Span};

/// A call site that structurally qualifies for rule classification.
///
/// Borrows from the syntax tree and the source it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCall<'a> {
    /// The whole call expression.
    pub call_span: Span,
    /// `receiver.Method`
    pub callee_span: Span,
    /// Receiver identifier, empty when the operand is not a bare identifier.
    pub receiver: &'a str,
    /// Just the method name. The receiver may itself hold candidates, so
    /// rewrites never touch it.
    pub method_span: Span,
    pub method: &'a str,
    /// First argument, quotes included.
    pub literal_span: Span,
    pub literal: &'a str,
    /// Second argument.
    pub value_span: Span,
    pub value: &'a str,
}

impl<'a> CandidateCall<'a> {
    /// Match a single node, returning `None` if it does not qualify.
    pub fn from_node(node: &'a Node, source: &'a str) -> Option<Self> {
        let Node::Call(call) = node else {
            return None;
        };
        let [first, second] = call.args.as_slice() else {
            return None;
        };
        let Node::Selector(selector) = call.callee.as_ref() else {
            return None;
        };
        let Node::Literal(literal) = first else {
            return None;
        };
        if !literal.kind.is_string() {
            return None;
        }
        let Node::Ident(value) = second else {
            return None;
        };

        let receiver = match selector.operand.as_ref() {
            Node::Ident(ident) => ident.name.as_str(),
            _ => "",
        };

        Some(Self {
            call_span: call.span,
            callee_span: selector.span,
            receiver,
            method_span: selector.field.span,
            method: selector.field.name.as_str(),
            literal_span: literal.span,
            literal: literal.span.text(source)?,
            value_span: value.span,
            value: value.name.as_str(),
        })
    }
}

/// Lazily yield every candidate call inside one declaration, in source order.
pub fn candidates<'a>(
    decl: &'a Node,
    source: &'a str,
) -> impl Iterator<Item = CandidateCall<'a>> + 'a {
    decl.pre_order()
        .filter_map(move |node| CandidateCall::from_node(node, source))
}
