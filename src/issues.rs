//! Issue types for lint results.
//!
//! Each issue is self-contained with everything the reporter needs:
//! - Text report: one `<path>:<line> -> <excerpt>` line per finding
//! - JSON report: serialized issue records
//! - Fix preview: the excerpt and its replacement

use std::fmt;

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::{FixVariant, LintError};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    FormatCall,
    ParseError,
    IoError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::FormatCall => write!(f, "format-call"),
            Rule::ParseError => write!(f, "parse-error"),
            Rule::IoError => write!(f, "io-error"),
        }
    }
}

// ============================================================
// Location
// ============================================================

/// Position of a call in a source file. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A logging call that has a mechanical fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingIssue {
    pub location: SourceLocation,
    /// Call text from the start of the callee to the closing parenthesis.
    pub excerpt: String,
    /// The same call after the fix.
    pub replacement: String,
    pub variant: FixVariant,
}

impl FindingIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::FormatCall
    }
}

impl fmt::Display for FindingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} -> {}",
            self.location.file_path, self.location.line, self.excerpt
        )
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// File could not be read, stat-ed or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IoErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl IoErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::IoError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found while linting.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Issue {
    Finding(FindingIssue),
    ParseError(ParseErrorIssue),
    IoError(IoErrorIssue),
}

impl Issue {
    pub fn from_error(err: &LintError) -> Self {
        let file_path = err.path().to_string_lossy().into_owned();
        let error = err.to_string();
        match err {
            LintError::Parse { .. } => Issue::ParseError(ParseErrorIssue { file_path, error }),
            LintError::Stat { .. } | LintError::Io { .. } | LintError::Patch { .. } => {
                Issue::IoError(IoErrorIssue { file_path, error })
            }
        }
    }
}

impl From<&LintError> for Issue {
    fn from(err: &LintError) -> Self {
        Issue::from_error(err)
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    /// File the issue belongs to.
    fn file_path(&self) -> &str;

    /// Line number, or 0 for file-level issues.
    fn line(&self) -> usize {
        0
    }

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;
}

impl Report for FindingIssue {
    fn file_path(&self) -> &str {
        &self.location.file_path
    }

    fn line(&self) -> usize {
        self.location.line
    }

    fn message(&self) -> String {
        self.excerpt.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for IoErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.line().cmp(&other.line()))
            .then_with(|| self.report_rule().cmp(&other.report_rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
