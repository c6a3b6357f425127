use std::{io, path::PathBuf};

use thiserror::Error;

use super::patch::PatchError;

/// Errors raised while linting or fixing, each tied to the path it came from.
///
/// - `Stat` is fatal to the whole run.
/// - `Parse` aborts the directory batch that contains the file.
/// - `Io` and `Patch` abort the fix of a single file.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("failed to fix {}: {source}", path.display())]
    Patch {
        path: PathBuf,
        #[source]
        source: PatchError,
    },
}

impl LintError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LintError::Stat { path, .. }
            | LintError::Parse { path, .. }
            | LintError::Io { path, .. }
            | LintError::Patch { path, .. } => path,
        }
    }
}
