//! Report formatting and printing utilities.
//!
//! Findings go to stdout, one `<path>:<line> -> <excerpt>` line each.
//! Recoverable errors go to stderr. Every `print_*` function has a `_to`
//! variant taking a writer, for tests and redirection.

use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, FixSummary},
};
use crate::issues::{FindingIssue, Issue, Report, Rule, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match &result.summary {
        CommandSummary::Check(summary) if summary.format == OutputFormat::Json => {
            print_json_to(result, &mut stdout)?;
            print_errors_to(&result.issues, verbose, &mut io::stderr().lock());
            return Ok(());
        }
        CommandSummary::Check(_) => {
            print_findings_to(&result.issues, &mut stdout);
            print_summary_to(&result.issues, &mut stdout);
        }
        CommandSummary::Fix(summary) => {
            print_fix_to(summary, &mut stdout);
        }
    }

    print_errors_to(&result.issues, verbose, &mut io::stderr().lock());

    if result.pending_count == 0 && result.error_count == 0 && !has_rewrites(result) {
        print_success_to(result.files_checked, &mut stdout);
    }
    Ok(())
}

fn has_rewrites(result: &CommandResult) -> bool {
    matches!(&result.summary, CommandSummary::Fix(s) if s.rewritten_count > 0)
}

/// Print finding lines in path and line order.
pub fn print_findings_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        if let Issue::Finding(finding) = issue {
            let _ = writeln!(writer, "{}", finding);
        }
    }
}

/// Print the `✘ N finding(s) in M file(s)` line when there are findings.
pub fn print_summary_to<W: Write>(issues: &[Issue], writer: &mut W) {
    let findings: Vec<&FindingIssue> = issues
        .iter()
        .filter_map(|issue| match issue {
            Issue::Finding(finding) => Some(finding),
            _ => None,
        })
        .collect();
    if findings.is_empty() {
        return;
    }

    let files: BTreeSet<&str> = findings
        .iter()
        .map(|f| f.location.file_path.as_str())
        .collect();
    let _ = writeln!(
        writer,
        "\n{} {} {} in {} {}",
        FAILURE_MARK.red(),
        findings.len(),
        if findings.len() == 1 { "finding" } else { "findings" }.yellow(),
        files.len(),
        if files.len() == 1 { "file" } else { "files" }
    );
}

/// Print a success message when no findings remain.
pub fn print_success_to<W: Write>(files_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} Go {} - no issues found",
            files_checked,
            if files_checked == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print recoverable errors, one `error:` line each.
pub fn print_errors_to<W: Write>(issues: &[Issue], verbose: bool, writer: &mut W) {
    let errors: Vec<&Issue> = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .collect();

    for issue in &errors {
        let _ = writeln!(
            writer,
            "{} {} [{}]",
            "error:".bold().red(),
            issue.message(),
            issue.report_rule()
        );
    }

    let parse_errors = errors
        .iter()
        .filter(|i| i.report_rule() == Rule::ParseError)
        .count();
    if parse_errors > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} directory batch(es) skipped because a file could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            parse_errors,
            "-v".cyan()
        );
    }
}

/// Dry-run previews or the apply summary for `fix`.
pub fn print_fix_to<W: Write>(summary: &FixSummary, writer: &mut W) {
    if summary.previews.is_empty() {
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} call(s) in {} file(s).",
            "Rewrote".green().bold(),
            summary.rewritten_count,
            summary.rewritten_file_count
        );
        return;
    }

    for preview in &summary.previews {
        let _ = writeln!(writer, "{} => {}", preview, preview.replacement);
    }
    let _ = writeln!(
        writer,
        "\n{} {} call(s) in {} file(s).",
        "Would rewrite".yellow().bold(),
        summary.previews.len(),
        summary.file_count
    );
    let _ = writeln!(writer, "Run with {} to rewrite these calls.", "--apply".cyan());
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files_checked: usize,
    findings: Vec<&'a FindingIssue>,
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    file_path: &'a str,
    rule: Rule,
    message: String,
}

/// Print the check result as a JSON document.
pub fn print_json_to<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    let mut report = JsonReport {
        files_checked: result.files_checked,
        findings: Vec::new(),
        errors: Vec::new(),
    };
    for issue in &result.issues {
        match issue {
            Issue::Finding(finding) => report.findings.push(finding),
            other => report.errors.push(JsonError {
                file_path: other.file_path(),
                rule: other.report_rule(),
                message: other.message(),
            }),
        }
    }

    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
