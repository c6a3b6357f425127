//! Common utility functions shared across the codebase.

/// 1-based line and column of a byte offset.
///
/// The column counts bytes from the start of the line, which is what Go
/// tooling reports.
///
/// # Examples
///
/// ```
/// use fmtlint::utils::line_col;
///
/// let source = "package main\n\nfunc f() {}\n";
/// assert_eq!(line_col(source, 0), (1, 1));
/// assert_eq!(line_col(source, 14), (3, 1));
/// assert_eq!(line_col(source, 19), (3, 6));
/// ```
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source.as_bytes()[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |pos| pos + 1);
    (line, offset - line_start + 1)
}
