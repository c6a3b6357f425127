//! Patch applier.
//!
//! Splices the rewritten method name and literal of each [`Finding`] into
//! the original source. Bytes outside the two spans of every finding are
//! copied verbatim.

use thiserror::Error;

use super::{classify::Finding, syntax::Span};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("finding {index} starts at byte {start}, before the previous rewrite ended at byte {cursor}")]
    Overlapping {
        index: usize,
        start: usize,
        cursor: usize,
    },
    #[error("finding {index} has a literal span that precedes its method span")]
    Misordered { index: usize },
    #[error("finding {index} ends at byte {end}, past the end of the source ({len} bytes)")]
    OutOfBounds { index: usize, end: usize, len: usize },
    #[error("finding {index} does not fall on character boundaries")]
    CharBoundary { index: usize },
}

/// Apply `findings` to `source`.
///
/// Findings must be sorted by ascending method offset and must not overlap,
/// as [`lint_source`](super::lint::lint_source) returns them.
pub fn apply_findings(source: &str, findings: &[Finding]) -> Result<String, PatchError> {
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;

    for (index, finding) in findings.iter().enumerate() {
        let method = finding.method_span;
        let literal = finding.literal_span;

        if method.start < cursor {
            return Err(PatchError::Overlapping {
                index,
                start: method.start,
                cursor,
            });
        }
        if method.start > method.end || method.end > literal.start || literal.start > literal.end
        {
            return Err(PatchError::Misordered { index });
        }
        if literal.end > source.len() {
            return Err(PatchError::OutOfBounds {
                index,
                end: literal.end,
                len: source.len(),
            });
        }

        let text = |span: Span| span.text(source).ok_or(PatchError::CharBoundary { index });

        output.push_str(text(Span::new(cursor, method.start))?);
        output.push_str(&finding.fix_callee.apply(text(method)?));
        output.push_str(text(Span::new(method.end, literal.start))?);
        output.push_str(&finding.fix_literal.apply(text(literal)?));
        cursor = literal.end;
    }

    output.push_str(
        Span::new(cursor, source.len())
            .text(source)
            .ok_or(PatchError::CharBoundary {
                index: findings.len(),
            })?,
    );
    Ok(output)
}
