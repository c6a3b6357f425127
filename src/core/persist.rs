//! Atomic persistence of rewritten files.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use super::{error::LintError, lint::FileResult};

/// Replace the contents of `path` without ever exposing a partial write.
///
/// The new contents go to a temporary file in the same directory, which
/// receives the original permission bits and is then renamed over `path`.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let permissions = fs::metadata(path)?.permissions();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Rewrite one file in place. Returns the number of call sites rewritten.
///
/// The full buffer is built before anything touches disk.
pub fn fix_file(file: &FileResult) -> Result<usize, LintError> {
    let fixed = file.fixed_source().map_err(|source| LintError::Patch {
        path: file.path.clone(),
        source,
    })?;

    write_atomic(&file.path, &fixed).map_err(|source| LintError::Io {
        path: file.path.clone(),
        operation: "write",
        source,
    })?;

    Ok(file.findings.len())
}
