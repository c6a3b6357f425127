//! Check command - Report logging calls that have a mechanical fix.

use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    CheckSummary, CommandResult, CommandSummary,
    helper::{error_issues, finding_issues, finish},
};
use crate::core::LintContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = LintContext::new(&args.common)?;
    let analysis = ctx.analyze();

    let mut issues = finding_issues(&analysis);
    issues.extend(error_issues(&analysis.errors));

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            format: args.format,
        }),
        issues,
        analysis.files_checked,
        analysis.finding_count(),
    ))
}
