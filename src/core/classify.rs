//! Rule classifier.
//!
//! Decides whether a [`CandidateCall`] violates the logging-call convention
//! and, if so, which of the two fixes applies:
//!
//! - **Format to plain**: `r.Warnf("msg: %v", err)` becomes `r.Warn("msg: ", err)`
//! - **Plain normalization**: `r.Warn("msg:", err)` becomes `r.Warn("msg: ", err)`
//!
//! Both fixes converge on the same canonical literal tail, so running the
//! classifier on already-fixed code yields nothing. The one exception is a
//! test receiver whose literal ends in several spaces: each run drops one.
//!
//! Only the method name and the literal are ever rewritten, never the
//! receiver, so a candidate nested in another candidate's receiver gets its
//! own disjoint edits.

use serde::Serialize;

use super::{candidate::CandidateCall, syntax::Span};
use crate::config::RuleSet;

/// Suffix marking a printf-style method (`Warnf`, `Errorf`, ...).
pub const FORMAT_SUFFIX: char = 'f';

/// Suffix of the methods that append a newline themselves (`Println`).
pub const LINE_SUFFIX: &str = "ln";

/// Rewrite applied to the method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalleeFix {
    /// Drop the trailing format marker: `Warnf` -> `Warn`.
    StripFormatSuffix,
    Identity,
}

impl CalleeFix {
    pub fn apply(&self, method: &str) -> String {
        match self {
            CalleeFix::StripFormatSuffix => method
                .strip_suffix(FORMAT_SUFFIX)
                .unwrap_or(method)
                .to_string(),
            CalleeFix::Identity => method.to_string(),
        }
    }
}

/// Rewrite applied to the format-string literal, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiteralFix {
    /// Remove the trailing verb and re-close the literal.
    TrimVerbAndClose { verb: String, test_receiver: bool },
    /// Re-close the literal with the canonical trailing separator.
    NormalizeTrailing { test_receiver: bool },
}

impl LiteralFix {
    pub fn apply(&self, literal: &str) -> String {
        let (body, close) = split_closing(literal);
        match self {
            LiteralFix::TrimVerbAndClose {
                verb,
                test_receiver,
            } => {
                let body = body.strip_suffix(verb.as_str()).unwrap_or(body);
                close_literal(body, close, *test_receiver)
            }
            LiteralFix::NormalizeTrailing { test_receiver } => {
                close_literal(body, close, *test_receiver)
            }
        }
    }
}

/// Split a literal into everything before its closing delimiter and the
/// delimiter itself.
fn split_closing(literal: &str) -> (&str, &str) {
    match literal.char_indices().next_back() {
        Some((idx, _)) => literal.split_at(idx),
        None => (literal, ""),
    }
}

/// Canonical tail: one trailing space is dropped, then test receivers get
/// no separator (`t.Error` already inserts one) and everything else gets a
/// single space back.
fn close_literal(body: &str, close: &str, test_receiver: bool) -> String {
    let body = body.strip_suffix(' ').unwrap_or(body);
    if test_receiver {
        format!("{}{}", body, close)
    } else {
        format!("{} {}", body, close)
    }
}

/// Which fix a finding carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixVariant {
    FormatToPlain,
    PlainNormalization,
}

impl std::fmt::Display for FixVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixVariant::FormatToPlain => write!(f, "format-to-plain"),
            FixVariant::PlainNormalization => write!(f, "plain-normalization"),
        }
    }
}

/// A detected, fixable violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub call_span: Span,
    /// `receiver.Method`, for reporting.
    pub callee_span: Span,
    /// The part `fix_callee` rewrites.
    pub method_span: Span,
    pub literal_span: Span,
    pub fix_callee: CalleeFix,
    pub fix_literal: LiteralFix,
}

impl Finding {
    pub fn variant(&self) -> FixVariant {
        match self.fix_callee {
            CalleeFix::StripFormatSuffix => FixVariant::FormatToPlain,
            CalleeFix::Identity => FixVariant::PlainNormalization,
        }
    }

    /// The call expression as it reads after the fix.
    ///
    /// Returns `None` if the spans do not fit `source`.
    pub fn rewritten_call(&self, source: &str) -> Option<String> {
        let receiver = Span::new(self.call_span.start, self.method_span.start).text(source)?;
        let method = self.method_span.text(source)?;
        let between = Span::new(self.method_span.end, self.literal_span.start).text(source)?;
        let literal = self.literal_span.text(source)?;
        let rest = Span::new(self.literal_span.end, self.call_span.end).text(source)?;

        Some(format!(
            "{}{}{}{}{}",
            receiver,
            self.fix_callee.apply(method),
            between,
            self.fix_literal.apply(literal),
            rest
        ))
    }

    /// Change in byte length once both spans are rewritten.
    pub fn length_delta(&self, source: &str) -> Option<isize> {
        let method = self.method_span.text(source)?;
        let literal = self.literal_span.text(source)?;
        let before = method.len() + literal.len();
        let after = self.fix_callee.apply(method).len() + self.fix_literal.apply(literal).len();
        Some(after as isize - before as isize)
    }
}

pub struct Classifier<'r> {
    rules: &'r RuleSet,
}

impl<'r> Classifier<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    /// Classify one candidate. Returns `None` when the call is not eligible,
    /// matches neither fix, or is already in canonical form.
    pub fn classify(&self, call: &CandidateCall<'_>) -> Option<Finding> {
        if !self.is_eligible(call) {
            return None;
        }

        let test_receiver = self.rules.is_test_receiver(call.receiver);
        let (fix_callee, fix_literal) = if call.method.ends_with(FORMAT_SUFFIX) {
            let (body, _) = split_closing(call.literal);
            let verb = self.rules.trailing_verb(body)?;
            (
                CalleeFix::StripFormatSuffix,
                LiteralFix::TrimVerbAndClose {
                    verb: verb.to_string(),
                    test_receiver,
                },
            )
        } else {
            (
                CalleeFix::Identity,
                LiteralFix::NormalizeTrailing { test_receiver },
            )
        };

        let unchanged = fix_callee.apply(call.method) == call.method
            && fix_literal.apply(call.literal) == call.literal;
        if unchanged {
            return None;
        }

        Some(Finding {
            call_span: call.call_span,
            callee_span: call.callee_span,
            method_span: call.method_span,
            literal_span: call.literal_span,
            fix_callee,
            fix_literal,
        })
    }

    fn is_eligible(&self, call: &CandidateCall<'_>) -> bool {
        let method = call.method;
        method.chars().next().is_some_and(char::is_uppercase)
            && self.rules.has_target_prefix(method)
            && !method.ends_with(LINE_SUFFIX)
            && !self.rules.is_excluded(call.receiver, method)
    }
}
