use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// All Go files that live directly inside one directory.
///
/// A directory is the unit of parsing: if one of its files cannot be
/// parsed, none of them are processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryBatch {
    pub dir: PathBuf,
    /// Sorted by path.
    pub files: Vec<PathBuf>,
}

/// Result of scanning a root directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub batches: Vec<DirectoryBatch>,
    pub skipped_count: usize,
    pub excluded_count: usize,
}

impl ScanResult {
    pub fn file_count(&self) -> usize {
        self.batches.iter().map(|b| b.files.len()).sum()
    }
}

pub fn scan_directories(root: &Path, excludes: &[Pattern], verbose: bool) -> ScanResult {
    let mut by_dir: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    let mut skipped_count = 0;
    let mut excluded_count = 0;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let excluded = is_excluded_dir(entry, excludes);
            if excluded {
                excluded_count += 1;
                if verbose {
                    eprintln!("Note: skipping excluded directory {}", entry.path().display());
                }
            }
            !excluded
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if entry.file_type().is_file() && is_go_file(entry.path()) {
            let dir = entry
                .path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            by_dir.entry(dir).or_default().push(entry.into_path());
        }
    }

    let batches = by_dir
        .into_iter()
        .map(|(dir, mut files)| {
            files.sort();
            DirectoryBatch { dir, files }
        })
        .collect();

    ScanResult {
        batches,
        skipped_count,
        excluded_count,
    }
}

fn is_excluded_dir(entry: &DirEntry, excludes: &[Pattern]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    excludes.iter().any(|p| p.matches(&name))
}

fn is_go_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("go"))
}
