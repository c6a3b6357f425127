use super::{CommandResult, CommandSummary};
use crate::core::{Analysis, LintError};
use crate::issues::{Issue, Report, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    files_checked: usize,
    pending_count: usize,
) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();

    CommandResult {
        summary,
        error_count,
        pending_count,
        issues,
        files_checked,
    }
}

/// Issues for every recoverable error of an analysis pass.
pub fn error_issues<'a>(errors: impl IntoIterator<Item = &'a LintError>) -> Vec<Issue> {
    errors.into_iter().map(Issue::from).collect()
}

/// Finding issues of every file in an analysis pass.
pub fn finding_issues(analysis: &Analysis) -> Vec<Issue> {
    analysis
        .files
        .iter()
        .flat_map(|file| file.issues())
        .map(Issue::Finding)
        .collect()
}
