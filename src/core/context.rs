use std::{fs, path::PathBuf};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, DEFAULT_EXCLUDED_DIRS, ExcludedCall},
    core::{
        error::LintError,
        file_scanner::{DirectoryBatch, scan_directories},
        lint::{FileResult, lint_file},
    },
};

/// Output of one analysis pass over every root.
#[derive(Debug, Default)]
pub struct Analysis {
    /// Files with at least one finding, sorted by path.
    pub files: Vec<FileResult>,
    /// Recoverable errors (parse failures abort their directory batch).
    pub errors: Vec<LintError>,
    /// Number of Go files discovered.
    pub files_checked: usize,
}

impl Analysis {
    pub fn finding_count(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }
}

/// Driver state for one run.
///
/// # Configuration Priority
///
/// There is no configuration file. Values come from:
/// 1. CLI arguments (e.g., `--exclude testdata`, `--prefix Notice`,
///    `--exclude-call pkgerrors.Errorf`)
/// 2. Built-in defaults
pub struct LintContext {
    /// Merged configuration (CLI args > defaults).
    pub config: Config,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    batches: Vec<DirectoryBatch>,
}

impl LintContext {
    /// Create a new `LintContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A root path cannot be inspected (fatal for the whole run)
    /// - An exclusion pattern or prefix is invalid
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let config = build_config(common_args);
        config.validate()?;

        let roots = if common_args.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            common_args.paths.clone()
        };

        let excludes = config.exclusion_patterns()?;
        let mut dir_roots = Vec::new();
        for root in &roots {
            let metadata = fs::metadata(root).map_err(|source| LintError::Stat {
                path: root.clone(),
                source,
            })?;
            if metadata.is_dir() {
                dir_roots.push(root.clone());
            } else {
                eprintln!(
                    "{} Ignoring non-directory {}",
                    "warning:".bold().yellow(),
                    root.display()
                );
            }
        }

        let mut batches = Vec::new();
        for root in &dir_roots {
            let scan = scan_directories(root, &excludes, verbose);
            if verbose {
                eprintln!(
                    "Note: found {} Go file(s) in {} directory(ies) under {}",
                    scan.file_count(),
                    scan.batches.len(),
                    root.display()
                );
                if scan.skipped_count > 0 {
                    eprintln!(
                        "Note: {} path(s) could not be accessed",
                        scan.skipped_count
                    );
                }
            }
            batches.extend(scan.batches);
        }

        Ok(Self {
            config,
            verbose,
            batches,
        })
    }

    pub fn file_count(&self) -> usize {
        self.batches.iter().map(|b| b.files.len()).sum()
    }

    /// Lint every discovered file.
    ///
    /// Directory batches and the files inside them run in parallel. A read
    /// or parse failure discards the whole batch it belongs to.
    pub fn analyze(&self) -> Analysis {
        let rules = &self.config.rules;

        let outcomes: Vec<Result<Vec<FileResult>, LintError>> = self
            .batches
            .par_iter()
            .map(|batch| {
                let results = batch
                    .files
                    .par_iter()
                    .map(|path| lint_file(path, rules))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(results.into_iter().flatten().collect())
            })
            .collect();

        let mut analysis = Analysis {
            files_checked: self.file_count(),
            ..Analysis::default()
        };

        for outcome in outcomes {
            match outcome {
                Ok(files) => analysis.files.extend(files),
                Err(err) => {
                    if self.verbose {
                        eprintln!("Note: skipping directory batch: {}", err);
                    }
                    analysis.errors.push(err);
                }
            }
        }

        analysis.files.sort_by(|a, b| a.path.cmp(&b.path));
        analysis
    }
}

fn build_config(common_args: &CommonArgs) -> Config {
    let mut config = Config::default();

    if !common_args.excludes.is_empty() {
        config.excluded_dirs = DEFAULT_EXCLUDED_DIRS
            .iter()
            .map(|s| s.to_string())
            .chain(common_args.excludes.iter().cloned())
            .collect();
    }

    if !common_args.prefixes.is_empty() {
        config.rules.prefixes = common_args.prefixes.clone();
    }

    config.rules.excluded_calls.extend(
        common_args
            .exclude_calls
            .iter()
            .map(|name| ExcludedCall::parse(name)),
    );

    config
}
