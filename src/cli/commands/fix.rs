//! Fix command - Rewrite logging calls in place.
//!
//! Every finding in a file is spliced into one buffer, which then replaces
//! the file atomically with its permissions preserved. A file whose write
//! fails is reported and the remaining files continue.
//!
//! Use `--apply` to actually rewrite files (default is dry-run mode).

use anyhow::Result;
use rayon::prelude::*;

use super::super::args::FixCommand;
use super::{
    CommandResult, CommandSummary, FixSummary,
    helper::{error_issues, finish},
};
use crate::core::{LintContext, LintError, fix_file};

pub fn fix(cmd: FixCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = LintContext::new(&args.common)?;
    let apply = args.apply;
    let analysis = ctx.analyze();

    let mut issues = error_issues(&analysis.errors);
    let previews = analysis
        .files
        .iter()
        .flat_map(|file| file.issues())
        .collect();
    let finding_count = analysis.finding_count();

    let (rewritten_count, rewritten_file_count) = if apply {
        let outcomes: Vec<Result<usize, LintError>> =
            analysis.files.par_iter().map(fix_file).collect();

        let mut rewritten = 0;
        let mut files = 0;
        for (file, outcome) in analysis.files.iter().zip(outcomes) {
            match outcome {
                Ok(count) => {
                    if ctx.verbose {
                        eprintln!(
                            "Note: rewrote {} call(s) in {}",
                            count,
                            file.path.display()
                        );
                    }
                    rewritten += count;
                    files += 1;
                }
                Err(err) => issues.extend(error_issues([&err])),
            }
        }
        (rewritten, files)
    } else {
        (0, 0)
    };

    let pending_count = if apply { 0 } else { finding_count };

    Ok(finish(
        CommandSummary::Fix(FixSummary {
            previews,
            file_count: analysis.files.len(),
            rewritten_count,
            rewritten_file_count,
            is_apply: apply,
        }),
        issues,
        analysis.files_checked,
        pending_count,
    ))
}
