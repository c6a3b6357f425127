use crate::cli::{args::OutputFormat, exit_status::ExitStatus};
use crate::issues::{FindingIssue, Issue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Check,
    Fix,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Fix(FixSummary),
}

impl CommandSummary {
    pub fn kind(&self) -> CommandKind {
        match self {
            CommandSummary::Check(_) => CommandKind::Check,
            CommandSummary::Fix(_) => CommandKind::Fix,
        }
    }
}

#[derive(Debug)]
pub struct CheckSummary {
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct FixSummary {
    /// One entry per finding, with its rewritten call.
    pub previews: Vec<FindingIssue>,
    /// Number of files with at least one finding.
    pub file_count: usize,
    pub rewritten_count: usize,
    pub rewritten_file_count: usize,
    pub is_apply: bool,
}

/// Result of running a fmtlint command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Findings (for `check`) and recoverable errors, sorted.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    /// Findings left in the tree once the command finishes.
    pub pending_count: usize,
    /// Number of Go files that were checked.
    pub files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Error
        } else if self.pending_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
