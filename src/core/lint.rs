//! Per-file lint pipeline: parse, filter, classify.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{
    candidate::candidates,
    classify::{Classifier, Finding},
    error::LintError,
    patch::{PatchError, apply_findings},
    syntax::{ParseError, parse_go_source},
};
use crate::{
    config::RuleSet,
    issues::{FindingIssue, SourceLocation},
    utils::line_col,
};

/// Findings for one source string, in ascending offset of their edits.
///
/// The walk yields an outer call before any call nested in its receiver,
/// although the nested call's edits come first in the buffer.
pub fn lint_source(source: &str, rules: &RuleSet) -> Result<Vec<Finding>, ParseError> {
    let tree = parse_go_source(source)?;
    let classifier = Classifier::new(rules);

    let mut findings: Vec<Finding> = tree
        .decls
        .iter()
        .flat_map(|decl| candidates(decl, source))
        .filter_map(|call| classifier.classify(&call))
        .collect();
    findings.sort_by_key(|finding| finding.method_span.start);
    Ok(findings)
}

/// Lint and rewrite a source string in one step.
pub fn fix_source(source: &str, rules: &RuleSet) -> Result<String, LintError> {
    let findings = lint_source(source, rules).map_err(|e| LintError::Parse {
        path: PathBuf::from("<source>"),
        reason: e.to_string(),
    })?;
    apply_findings(source, &findings).map_err(|source| LintError::Patch {
        path: PathBuf::from("<source>"),
        source,
    })
}

/// A file with at least one finding, plus the source the findings refer to.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub source: String,
    pub findings: Vec<Finding>,
}

impl FileResult {
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn fixed_source(&self) -> Result<String, PatchError> {
        apply_findings(&self.source, &self.findings)
    }

    /// User-facing issues, one per finding.
    pub fn issues(&self) -> Vec<FindingIssue> {
        let file_path = self.display_path();
        self.findings
            .iter()
            .map(|finding| {
                let (line, col) = line_col(&self.source, finding.callee_span.start);
                let excerpt = finding
                    .call_span
                    .text(&self.source)
                    .unwrap_or_default()
                    .to_string();
                let replacement = finding
                    .rewritten_call(&self.source)
                    .unwrap_or_else(|| excerpt.clone());
                FindingIssue {
                    location: SourceLocation::new(file_path.clone(), line, col),
                    excerpt,
                    replacement,
                    variant: finding.variant(),
                }
            })
            .collect()
    }
}

/// Read and lint one file. Returns `Ok(None)` when the file is clean.
pub fn lint_file(path: &Path, rules: &RuleSet) -> Result<Option<FileResult>, LintError> {
    let bytes = fs::read(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    let source = String::from_utf8(bytes).map_err(|_| LintError::Parse {
        path: path.to_path_buf(),
        reason: "file is not valid UTF-8".to_string(),
    })?;

    let findings = lint_source(&source, rules).map_err(|e| LintError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if findings.is_empty() {
        return Ok(None);
    }

    Ok(Some(FileResult {
        path: path.to_path_buf(),
        source,
        findings,
    }))
}
